use crate::Strategy;
use anyhow::Result;
use clap::Args;
use lib_tic_tac_toe::match_runner::{play_match, MatchTally};
use rayon::prelude::*;
use tracing::info;

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Number of matches to play
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Strategy playing X
    #[arg(long, value_enum, default_value = "medium")]
    pub x: Strategy,

    /// Strategy playing O
    #[arg(long, value_enum, default_value = "random")]
    pub o: Strategy,

    /// Base seed; match i uses seeds derived from it
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,
}

pub fn execute(args: BenchArgs) -> Result<()> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    info!(games = args.games, x = ?args.x, o = ?args.o, "starting matches");
    let tally = run_matches(&args);

    println!(
        "{} matches, X ({:?}) won {}, O ({:?}) won {}, drawn {}",
        tally.total(),
        args.x,
        tally.x_wins,
        args.o,
        tally.o_wins,
        tally.draws
    );

    Ok(())
}

pub fn run_matches(args: &BenchArgs) -> MatchTally {
    (0..args.games)
        .into_par_iter()
        .map(|i| {
            // each match gets its own pickers, seeded apart from every other match
            let seed = args
                .seed
                .map(|seed| seed.wrapping_add(2 * i as u64));
            let x = args.x.picker(seed);
            let o = args.o.picker(seed.map(|seed| seed.wrapping_add(1)));

            MatchTally::from(play_match(x.as_ref(), o.as_ref()))
        })
        .reduce(MatchTally::default, |a, b| a + b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(games: usize, x: Strategy, o: Strategy) -> BenchArgs {
        BenchArgs {
            games,
            x,
            o,
            seed: Some(17),
            threads: None,
        }
    }

    #[test]
    fn every_match_is_counted() {
        let tally = run_matches(&args(64, Strategy::Random, Strategy::Random));

        assert_eq!(64, tally.total());
    }

    #[test]
    fn seeded_runs_repeat() {
        let first = run_matches(&args(50, Strategy::Medium, Strategy::Random));
        let second = run_matches(&args(50, Strategy::Medium, Strategy::Random));

        assert_eq!(first, second);
    }
}
