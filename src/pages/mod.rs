//! Pages for the portfolio shell.

mod home;

pub use home::Home;
