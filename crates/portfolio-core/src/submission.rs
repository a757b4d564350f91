//! Contact form submission state machine.
//!
//! One attempt at a time: an attempt is created `Pending`, resolved to
//! exactly one terminal status by an injectable [`MessageGateway`], and
//! discarded again when the UI's reset timer fires. The gateway seam exists
//! so tests can substitute deterministic stubs for the randomized
//! [`SimulatedGateway`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Artificial latency of the simulated remote call.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(2000);

/// Probability that the simulated remote call succeeds.
pub const SUCCESS_RATE: f64 = 0.9;

/// Delay between outcome resolution and the submit control returning to its
/// idle presentation.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Payload of one contact form submission.
///
/// Opaque to the controller; no validation happens here beyond what the
/// form's own markup enforces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// The simulated remote endpoint rejected the submission.
///
/// This is the only failure mode in the whole app; it is surfaced as an
/// error notification and recovered locally by the reset timer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Submission rejected: {reason}")]
pub struct SubmitError {
    pub reason: String,
}

impl SubmitError {
    /// The generic rejection the simulated gateway produces.
    pub fn rejected() -> Self {
        Self {
            reason: "network error".to_string(),
        }
    }
}

/// State of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Gateway call in flight
    Pending,
    /// Gateway accepted the message
    Succeeded,
    /// Gateway rejected the message
    Failed,
}

impl SubmissionStatus {
    /// Whether this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Pending)
    }
}

/// One in-flight or resolved submission attempt.
///
/// Status only ever moves `Pending -> Succeeded` or `Pending -> Failed`;
/// a resolved attempt ignores further resolutions.
#[derive(Debug, Clone)]
pub struct SubmissionAttempt {
    pub status: SubmissionStatus,
    pub started_at: DateTime<Utc>,
}

impl SubmissionAttempt {
    fn begin() -> Self {
        Self {
            status: SubmissionStatus::Pending,
            started_at: Utc::now(),
        }
    }

    fn resolve(&mut self, status: SubmissionStatus) {
        if self.status == SubmissionStatus::Pending && status.is_terminal() {
            self.status = status;
        }
    }
}

/// Boxed future type for gateway calls, keeping the trait object-safe.
pub type GatewayFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send + 'a>>;

/// Capability for attempting a remote submission.
///
/// The production implementation is [`SimulatedGateway`]; tests supply
/// deterministic stubs.
pub trait MessageGateway: Send + Sync {
    /// Attempt to deliver the message to the remote endpoint.
    fn send(&self, message: ContactMessage) -> GatewayFuture<'_>;
}

/// Simulated remote endpoint: fixed latency, fixed success probability.
///
/// There is no real backend behind the contact form; this stands in for one
/// with a 2000 ms delay and a 90 % acceptance rate.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    success_rate: f64,
}

impl SimulatedGateway {
    /// Gateway with the stock latency and success rate.
    pub fn new() -> Self {
        Self {
            latency: SUBMIT_LATENCY,
            success_rate: SUCCESS_RATE,
        }
    }

    /// Gateway with explicit parameters. The success rate is clamped to
    /// `0.0..=1.0`, so `1.0` forces success and `0.0` forces failure.
    pub fn with_parameters(latency: Duration, success_rate: f64) -> Self {
        Self {
            latency,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageGateway for SimulatedGateway {
    fn send(&self, _message: ContactMessage) -> GatewayFuture<'_> {
        let latency = self.latency;
        let success_rate = self.success_rate;

        Box::pin(async move {
            tokio::time::sleep(latency).await;

            if rand::rng().random::<f64>() < success_rate {
                Ok(())
            } else {
                Err(SubmitError::rejected())
            }
        })
    }
}

/// Orchestrates one submission attempt against a [`MessageGateway`].
///
/// No guard exists against overlapping attempts at this level; the form
/// component disables its submit control while an attempt is pending, the
/// same presentation-level guard the page itself relies on.
pub struct SubmissionController {
    gateway: Arc<dyn MessageGateway>,
    attempt: Option<SubmissionAttempt>,
}

impl SubmissionController {
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self {
            gateway,
            attempt: None,
        }
    }

    /// Status of the current attempt, if one exists.
    pub fn status(&self) -> Option<SubmissionStatus> {
        self.attempt.as_ref().map(|a| a.status)
    }

    /// Whether an attempt is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.status(), Some(SubmissionStatus::Pending))
    }

    /// The current attempt, if one exists.
    pub fn attempt(&self) -> Option<&SubmissionAttempt> {
        self.attempt.as_ref()
    }

    /// Run one submission attempt to its terminal status.
    ///
    /// Creates a `Pending` attempt, awaits the gateway, and records exactly
    /// one terminal status, which is also returned.
    pub async fn submit(&mut self, message: ContactMessage) -> SubmissionStatus {
        self.attempt = Some(SubmissionAttempt::begin());

        let status = match self.gateway.send(message).await {
            Ok(()) => SubmissionStatus::Succeeded,
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                SubmissionStatus::Failed
            }
        };

        if let Some(attempt) = self.attempt.as_mut() {
            attempt.resolve(status);
        }

        status
    }

    /// Return to the pre-submission state. Idempotent.
    pub fn reset(&mut self) {
        self.attempt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminality() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(SubmissionStatus::Succeeded.is_terminal());
        assert!(SubmissionStatus::Failed.is_terminal());
    }

    #[test]
    fn test_attempt_resolves_once() {
        let mut attempt = SubmissionAttempt::begin();
        assert_eq!(attempt.status, SubmissionStatus::Pending);

        attempt.resolve(SubmissionStatus::Succeeded);
        assert_eq!(attempt.status, SubmissionStatus::Succeeded);

        // A resolved attempt never moves backward or flips outcome.
        attempt.resolve(SubmissionStatus::Failed);
        assert_eq!(attempt.status, SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_attempt_never_resolves_to_pending() {
        let mut attempt = SubmissionAttempt::begin();
        attempt.resolve(SubmissionStatus::Pending);
        assert_eq!(attempt.status, SubmissionStatus::Pending);

        attempt.resolve(SubmissionStatus::Failed);
        attempt.resolve(SubmissionStatus::Pending);
        assert_eq!(attempt.status, SubmissionStatus::Failed);
    }

    #[test]
    fn test_success_rate_clamped() {
        let gateway = SimulatedGateway::with_parameters(Duration::ZERO, 7.5);
        assert_eq!(gateway.success_rate, 1.0);

        let gateway = SimulatedGateway::with_parameters(Duration::ZERO, -0.5);
        assert_eq!(gateway.success_rate, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_success() {
        let gateway = Arc::new(SimulatedGateway::with_parameters(SUBMIT_LATENCY, 1.0));
        let mut controller = SubmissionController::new(gateway);

        assert!(controller.status().is_none());

        let started = tokio::time::Instant::now();
        let outcome = controller.submit(ContactMessage::default()).await;

        assert_eq!(outcome, SubmissionStatus::Succeeded);
        assert_eq!(controller.status(), Some(SubmissionStatus::Succeeded));
        assert!(started.elapsed() >= SUBMIT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_failure() {
        let gateway = Arc::new(SimulatedGateway::with_parameters(SUBMIT_LATENCY, 0.0));
        let mut controller = SubmissionController::new(gateway);

        let outcome = controller.submit(ContactMessage::default()).await;

        assert_eq!(outcome, SubmissionStatus::Failed);
        assert_eq!(controller.status(), Some(SubmissionStatus::Failed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_is_idempotent() {
        let gateway = Arc::new(SimulatedGateway::with_parameters(Duration::ZERO, 1.0));
        let mut controller = SubmissionController::new(gateway);

        controller.submit(ContactMessage::default()).await;
        assert!(controller.status().is_some());

        controller.reset();
        assert!(controller.status().is_none());

        controller.reset();
        assert!(controller.status().is_none());
    }
}
