//! Transient notification lifecycle.
//!
//! At most one notification is live at a time. A new one replaces any
//! still-visible predecessor immediately and aborts the predecessor's timer
//! task outright, so a stale timer can never act on a superseded instance.
//!
//! ## Phases
//!
//! | Phase | When | Presentation |
//! |-------|------|--------------|
//! | `Entering` | On mount | Offscreen, entry transition armed |
//! | `Shown` | 100 ms after mount | Visible |
//! | `Leaving` | 5000 ms after mount, or on manual close | Exit transition |
//! | (removed) | 300 ms after `Leaving` began | Unmounted |

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay between mount and the visible presentation, leaving room for the
/// entry transition.
pub const NOTIFICATION_ENTER_DELAY: Duration = Duration::from_millis(100);

/// Total lifetime from mount to the start of auto-dismissal.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);

/// Duration of the exit transition before removal.
pub const NOTIFICATION_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Identifier of one notification instance. Monotonically increasing per
/// center; phase timers carry it so they no-op after replacement.
pub type NotificationId = u64;

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier class for this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    /// Glyph shown next to the message.
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Info => "i",
            NotificationKind::Success => "\u{2713}",
            NotificationKind::Error => "!",
        }
    }
}

/// Presentation phase of the live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Shown,
    Leaving,
}

/// One transient status banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
    pub created_at: DateTime<Utc>,
}

/// Live notification plus the cancellable handle of its timer chain.
struct Live {
    notification: Notification,
    timer: JoinHandle<()>,
}

struct CenterState {
    live: Option<Live>,
    next_id: NotificationId,
}

/// Owns the single live-notification slot.
///
/// Cheaply clonable handle; clones share the slot. `notify` and `dismiss`
/// must be called from within a tokio runtime, as the phase timers run as
/// spawned tasks. The UI subscribes to snapshots over a watch channel,
/// which only ever carries the latest state.
#[derive(Clone)]
pub struct NotificationCenter {
    state: Arc<Mutex<CenterState>>,
    snapshot: Arc<watch::Sender<Option<Notification>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(None);
        Self {
            state: Arc::new(Mutex::new(CenterState {
                live: None,
                next_id: 0,
            })),
            snapshot: Arc::new(snapshot),
        }
    }

    /// Subscribe to snapshots of the live notification.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.snapshot.subscribe()
    }

    /// Snapshot of the live notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.state
            .lock()
            .live
            .as_ref()
            .map(|live| live.notification.clone())
    }

    /// Mount a new notification, replacing any live one.
    ///
    /// The superseded instance is removed without awaiting its exit
    /// transition and its pending timers are aborted.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let mut state = self.state.lock();

        if let Some(old) = state.live.take() {
            old.timer.abort();
        }

        let id = state.next_id;
        state.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Entering,
            created_at: Utc::now(),
        };
        tracing::debug!(id, ?kind, "Mounting notification");

        let timer = tokio::spawn(self.clone().run_lifecycle(id));
        state.live = Some(Live {
            notification,
            timer,
        });
        drop(state);

        self.publish();
        id
    }

    /// Close the live notification early, if any. No-op while nothing is
    /// live or the exit transition is already running.
    pub fn dismiss(&self) {
        let mut state = self.state.lock();
        let Some(live) = state.live.as_mut() else {
            return;
        };
        if live.notification.phase == NotificationPhase::Leaving {
            return;
        }

        live.timer.abort();
        live.notification.phase = NotificationPhase::Leaving;
        let id = live.notification.id;

        let center = self.clone();
        live.timer = tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_EXIT_DURATION).await;
            center.remove(id);
        });
        drop(state);

        self.publish();
    }

    /// Full timer chain for one instance: enter, stay, leave, remove.
    async fn run_lifecycle(self, id: NotificationId) {
        tokio::time::sleep(NOTIFICATION_ENTER_DELAY).await;
        self.advance(id, NotificationPhase::Shown);

        tokio::time::sleep(NOTIFICATION_LIFETIME - NOTIFICATION_ENTER_DELAY).await;
        self.advance(id, NotificationPhase::Leaving);

        tokio::time::sleep(NOTIFICATION_EXIT_DURATION).await;
        self.remove(id);
    }

    fn advance(&self, id: NotificationId, phase: NotificationPhase) {
        let mut state = self.state.lock();
        let Some(live) = state.live.as_mut() else {
            return;
        };
        // Stale timer from a superseded instance
        if live.notification.id != id {
            return;
        }
        live.notification.phase = phase;
        drop(state);

        self.publish();
    }

    fn remove(&self, id: NotificationId) {
        let mut state = self.state.lock();
        match state.live.as_ref() {
            Some(live) if live.notification.id == id => {
                state.live = None;
            }
            _ => return,
        }
        drop(state);

        self.publish();
    }

    fn publish(&self) {
        let _ = self.snapshot.send(self.current());
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
