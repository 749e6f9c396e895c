use clap::{Parser, Subcommand};

use self::{
    play::{PlayArg, WatchArg},
    simulate::SimulateArg,
};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Watch two random players play against each other
    Watch(#[clap(flatten)] WatchArg),
    /// Play as player 0 against a random opponent
    Play(#[clap(flatten)] PlayArg),
    /// Run many random games without a terminal UI and print a JSON summary
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Watch(WatchArg::default())) {
        Mode::Watch(arg) => play::run_watch(&arg)?,
        Mode::Play(arg) => play::run_play(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
