//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Play tic-tac-toe, rewind to any move, and branch from there", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of moves and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) separated by commas
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..9))]
        moves: Vec<u8>,

        /// Jump to this step after the moves are played
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves in descending order
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_parses_comma_separated_moves() {
        let cli = Cli::try_parse_from(["strictly_timeline", "replay", "--moves", "0,3,1", "--json"])
            .expect("valid arguments");
        match cli.command {
            Command::Replay { moves, jump, json, .. } => {
                assert_eq!(moves, vec![0, 3, 1]);
                assert_eq!(jump, None);
                assert!(json);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_rejects_index_off_board() {
        assert!(Cli::try_parse_from(["strictly_timeline", "replay", "--moves", "0,9"]).is_err());
    }
}
