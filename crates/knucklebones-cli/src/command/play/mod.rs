use std::time::Duration;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screens;
mod table;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    /// Milliseconds between moves
    #[clap(long, default_value_t = 500)]
    interval_ms: u64,
    /// Seed for every game of the session (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Start in turbo mode
    #[clap(long, default_value_t = false)]
    turbo: bool,
}

impl Default for WatchArg {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            seed: None,
            turbo: false,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds the opponent waits before moving
    #[clap(long, default_value_t = 500)]
    interval_ms: u64,
    /// Seed for every game of the session (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run_watch(arg: &WatchArg) -> anyhow::Result<()> {
    let WatchArg {
        interval_ms,
        seed,
        turbo,
    } = arg;

    let mut app = PlayApp::watch(Duration::from_millis(*interval_ms), *seed, *turbo);
    Tui::new().run(&mut app)
}

pub(crate) fn run_play(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { interval_ms, seed } = arg;

    let mut app = PlayApp::play(Duration::from_millis(*interval_ms), *seed);
    Tui::new().run(&mut app)
}
