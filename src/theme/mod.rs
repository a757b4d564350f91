//! Theme for the portfolio shell.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
