use std::path::PathBuf;

use knucklebones_engine::{Game, GameResult, MatchRecord, RandomPolicy, play_out};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[clap(long, default_value_t = 1000)]
    games: usize,
    /// Seed for the whole run (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Output file path (defaults to stdout)
    #[clap(long)]
    output: Option<PathBuf>,
    /// Include the full record of every game in the output
    #[clap(long, default_value_t = false)]
    records: bool,
}

/// Aggregate results of a batch of random-vs-random games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SimulationSummary {
    games: usize,
    /// Wins indexed by player.
    wins: [u32; 2],
    draws: u32,
    mean_scores: [f64; 2],
    mean_move_count: f64,
    longest_game: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    records: Vec<MatchRecord>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        games,
        seed,
        output,
        records,
    } = arg;

    let mut output = Output::from_output_path(output.clone())?;
    let summary = simulate(*games, *seed, *records)?;
    log::info!(
        "simulated {} games: wins {:?}, draws {}",
        summary.games,
        summary.wins,
        summary.draws
    );
    output.write_json(&summary)
}

#[expect(clippy::cast_precision_loss)]
fn simulate(
    games: usize,
    seed: Option<u64>,
    keep_records: bool,
) -> anyhow::Result<SimulationSummary> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut wins = [0; 2];
    let mut draws = 0;
    let mut score_totals = [0_u64; 2];
    let mut move_total = 0;
    let mut longest_game = 0;
    let mut records = Vec::new();

    for _ in 0..games {
        let mut game = Game::with_seed(rng.random());
        let mut policies = [
            RandomPolicy::with_seed(rng.random()),
            RandomPolicy::with_seed(rng.random()),
        ];
        let record = play_out(&mut game, &mut policies)?;
        log::debug!(
            "game {} finished after {} moves: {:?}",
            record.seed,
            record.move_count(),
            record.result
        );

        match record.result {
            GameResult::Winner(player) => wins[player.index()] += 1,
            GameResult::Draw => draws += 1,
        }
        for (total, score) in score_totals.iter_mut().zip(record.scores) {
            *total += u64::from(score);
        }
        move_total += record.move_count();
        longest_game = longest_game.max(record.move_count());
        if keep_records {
            records.push(record);
        }
    }

    let divisor = games.max(1) as f64;
    Ok(SimulationSummary {
        games,
        wins,
        draws,
        mean_scores: score_totals.map(|total| total as f64 / divisor),
        mean_move_count: move_total as f64 / divisor,
        longest_game,
        records,
    })
}
