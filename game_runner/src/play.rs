use crate::{Opponent, Strategy};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use lib_tic_tac_toe::{OpponentKind, TicTacToeGame};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Who plays O
    #[arg(long, short = 'o', value_enum, default_value = "computer")]
    pub opponent: Opponent,

    /// Strategy used by the computer opponent
    #[arg(long, value_enum, default_value = "medium")]
    pub strategy: Strategy,

    /// Random seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub think_ms: u64,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut game = TicTacToeGame::new(args.strategy.picker(args.seed));
    let think = Duration::from_millis(args.think_ms);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut game,
        args.opponent.into(),
        think,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Parses a move typed as `row,col`.
pub fn parse_move(input: &str) -> Result<(usize, usize)> {
    let (row, col) = input
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected row,col but got {:?}", input.trim()))?;

    let row = row.trim().parse().context("row is not a number")?;
    let col = col.trim().parse().context("column is not a number")?;

    Ok((row, col))
}

/// Plays one game, reading moves from `input` and writing the board and
/// prompts to `output`. Stops early if `input` runs out.
pub fn run<R: BufRead, W: Write>(
    game: &mut TicTacToeGame,
    opponent: OpponentKind,
    think: Duration,
    mut input: R,
    mut output: W,
) -> Result<()> {
    game.start_new_game(opponent);

    loop {
        writeln!(output, "{}{}", game.board(), game.status_text())?;
        if game.is_game_over() {
            break;
        }

        write!(output, "Enter move row,col: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("input closed, leaving the game unfinished");
            return Ok(());
        }

        let (row, col) = match parse_move(&line) {
            Ok(coordinates) => coordinates,
            Err(err) => {
                writeln!(output, "Invalid input ({:#}). Try again.", err)?;
                continue;
            }
        };

        match game.take_turn(row, col) {
            Ok(true) => {}
            Ok(false) => {
                writeln!(output, "That cell is taken. Try again.")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{}. Try again.", err)?;
                continue;
            }
        }

        if opponent == OpponentKind::Computer && !game.is_game_over() {
            thread::sleep(think);
            if let Some(position) = game.take_computer_turn() {
                writeln!(output, "Computer played {}", position)?;
            }
        }
    }

    info!(outcome = ?game.outcome(), "game finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_agents::MediumDifficultyPicker;
    use lib_boardgame::Player;

    fn play(opponent: OpponentKind, moves: &str) -> (TicTacToeGame, String) {
        let mut game = TicTacToeGame::with_picker(MediumDifficultyPicker::with_seed(4));
        let mut output = Vec::new();

        run(
            &mut game,
            opponent,
            Duration::from_millis(0),
            moves.as_bytes(),
            &mut output,
        )
        .unwrap();

        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_move_accepts_spaces() {
        assert_eq!((1, 2), parse_move(" 1 , 2\n").unwrap());
        assert!(parse_move("12").is_err());
        assert!(parse_move("a,1").is_err());
        assert!(parse_move("1,-1").is_err());
    }

    #[test]
    fn two_humans_play_to_a_win() {
        let (game, output) = play(OpponentKind::Human, "0,0\n1,0\n0,1\n1,1\n0,2\n");

        assert_eq!(Player::X, game.winner());
        assert!(output.ends_with("X wins!\n"));
    }

    #[test]
    fn bad_input_is_reported_and_retried() {
        let (game, output) = play(OpponentKind::Human, "nonsense\n5,0\n0,0\n0,0\n");

        assert!(output.contains("Invalid input"));
        assert!(output.contains("row 5 out of bounds"));
        assert!(output.contains("That cell is taken"));
        assert_eq!(Ok(Player::X), game.value_at(0, 0));
        assert_eq!(Player::O, game.current_player());
    }

    #[test]
    fn computer_answers_each_move() {
        let (game, output) = play(OpponentKind::Computer, "1,1\n");

        assert!(output.contains("Computer played"));
        assert_eq!(7, game.board().empty_count());
        assert_eq!(Player::X, game.current_player());
    }
}
