mod bench;
mod play;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lib_agents::{MediumDifficultyPicker, RandomPicker};
use lib_boardgame::MovePicker;
use lib_tic_tac_toe::OpponentKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Tic-tac-toe against a human or the computer")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game in the terminal
    Play(play::PlayArgs),
    /// Pit two strategies against each other over many matches
    Bench(bench::BenchArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    Human,
    Computer,
}

impl From<Opponent> for OpponentKind {
    fn from(opponent: Opponent) -> Self {
        match opponent {
            Opponent::Human => OpponentKind::Human,
            Opponent::Computer => OpponentKind::Computer,
        }
    }
}

/// The move selection strategies a computer player can use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Any empty cell
    Random,
    /// Win if possible, else block, else random
    Medium,
}

impl Strategy {
    pub fn picker(self, seed: Option<u64>) -> Box<dyn MovePicker> {
        match (self, seed) {
            (Strategy::Random, Some(seed)) => Box::new(RandomPicker::with_seed(seed)),
            (Strategy::Random, None) => Box::new(RandomPicker::new()),
            (Strategy::Medium, Some(seed)) => Box::new(MediumDifficultyPicker::with_seed(seed)),
            (Strategy::Medium, None) => Box::new(MediumDifficultyPicker::new()),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play(args) => play::execute(args),
        Command::Bench(args) => bench::execute(args),
    }
}
