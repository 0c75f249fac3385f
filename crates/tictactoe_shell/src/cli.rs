//! Command-line interface for the tic-tac-toe shell.

use clap::Parser;
use tictactoe_engine::Position;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play these moves non-interactively, e.g. "0,0 1,0 0,1"
    #[arg(long, value_delimiter = ' ', num_args = 1..)]
    pub moves: Vec<Position>,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print only status lines, not the board
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_scripted_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "--moves", "0,0 1,1 2,2"]).expect("valid args");
        assert_eq!(
            cli.moves,
            vec![Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT]
        );
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.quiet);
    }

    #[test]
    fn test_rejects_off_board_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "--moves", "0,3"]).is_err());
    }
}
