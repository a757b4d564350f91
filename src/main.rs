#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::submission::{SimulatedGateway, SUBMIT_LATENCY};

/// Forced submission outcome, set from the command line
static FORCED_OUTCOME: OnceLock<Option<ForcedOutcome>> = OnceLock::new();

/// Demo override for the simulated contact submission
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ForcedOutcome {
    /// Every submission succeeds
    Succeed,
    /// Every submission fails
    Fail,
}

/// Build the submission gateway, honoring any forced outcome.
pub fn simulated_gateway() -> SimulatedGateway {
    match FORCED_OUTCOME.get().copied().flatten() {
        Some(ForcedOutcome::Succeed) => SimulatedGateway::with_parameters(SUBMIT_LATENCY, 1.0),
        Some(ForcedOutcome::Fail) => SimulatedGateway::with_parameters(SUBMIT_LATENCY, 0.0),
        None => SimulatedGateway::new(),
    }
}

/// Portfolio - desktop presentation shell
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio - desktop presentation shell")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    height: f64,

    /// Force every simulated submission to one outcome (demo aid)
    #[arg(long, value_enum)]
    force_outcome: Option<ForcedOutcome>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = FORCED_OUTCOME.set(args.force_outcome);

    tracing::info!(
        width = args.width,
        height = args.height,
        forced = ?args.force_outcome,
        "Starting portfolio shell"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
