//! Strictly Timeline - command-line entry point.

use anyhow::Result;
use clap::Parser;
use strictly_timeline::DisplayOrder;
use strictly_timeline_tui::cli::{Cli, Command};
use strictly_timeline_tui::config::TuiConfig;
use strictly_timeline_tui::{init_stderr_logging, replay, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => {
            let config = TuiConfig::load(config.as_deref())?.with_descending(descending);
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging(&TuiConfig::default());
            let order = if descending {
                DisplayOrder::Descending
            } else {
                DisplayOrder::Ascending
            };
            let engine = replay::replay(&moves, jump, order)?;
            let view = engine.view();
            let output = if json {
                replay::render_json(&view)?
            } else {
                replay::render_text(&view)
            };
            println!("{}", output);
            Ok(())
        }
    }
}
