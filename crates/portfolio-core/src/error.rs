//! Error types for the portfolio presentation core

use thiserror::Error;

use crate::submission::SubmitError;

/// Main error type for portfolio-core operations.
///
/// The taxonomy is deliberately small: the only runtime failure mode is the
/// simulated submission rejection, and the only parsing surface is the
/// geometry payload the webview bridge ships in.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The simulated remote submission was rejected
    #[error(transparent)]
    Submission(#[from] SubmitError),

    /// A bridge payload could not be decoded
    #[error("Bridge payload error: {0}")]
    Bridge(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
