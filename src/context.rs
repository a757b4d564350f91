//! Service context for the portfolio shell.
//!
//! The page's behavior lives in two explicit service objects: the
//! notification center and the submission controller with its injected
//! gateway. They are constructed once in the root component and handed to
//! whichever component needs them; nothing is ambient.

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::notify::NotificationCenter;
use portfolio_core::submission::{MessageGateway, SubmissionController};
use tokio::sync::RwLock;

/// Shared submission controller.
///
/// Wrapped in Arc<RwLock<>> so the form's submit task can hold it across
/// the gateway await while other components stay read-capable.
pub type SharedController = Arc<RwLock<SubmissionController>>;

/// The service objects the page components depend on.
#[derive(Clone)]
pub struct Services {
    pub notifications: NotificationCenter,
    pub controller: SharedController,
}

impl Services {
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self {
            notifications: NotificationCenter::new(),
            controller: Arc::new(RwLock::new(SubmissionController::new(gateway))),
        }
    }
}

/// Hook to access the shared services from context.
pub fn use_services() -> Services {
    use_context::<Services>()
}
