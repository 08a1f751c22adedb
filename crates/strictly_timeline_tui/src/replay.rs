//! Non-interactive replay: apply moves, print the derived view.

use anyhow::{Result, bail};
use strictly_timeline::{DisplayOrder, GameEngine, Position, ViewModel};
use tracing::{info, instrument, warn};

/// Plays `moves` from a fresh game, optionally jumps, and returns the engine.
///
/// Illegal moves are skipped with a warning, matching how the board ignores
/// clicks on taken cells.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[u8], jump: Option<usize>, order: DisplayOrder) -> Result<GameEngine> {
    let mut engine = GameEngine::with_order(order);

    for &index in moves {
        let Some(pos) = Position::from_index(usize::from(index)) else {
            bail!("cell index {index} is outside the board (0-8)");
        };
        if let Err(error) = engine.try_play_move(pos) {
            warn!(%error, index, "Move ignored");
        }
    }

    if let Some(step) = jump {
        let len = engine.timeline().len();
        if step >= len {
            bail!("cannot jump to step {step}: only {len} steps recorded");
        }
        engine.jump_to(step);
    }

    info!(steps = engine.timeline().len(), cursor = engine.cursor(), "Replay finished");
    Ok(engine)
}

/// Renders a view as plain text: board, status, then the move list with the
/// current entry marked.
pub fn render_text(view: &ViewModel<'_>) -> String {
    let mut out = view.current_board.display();
    out.push_str("\n\n");
    out.push_str(&view.status_text);
    if let Some(line) = view.winning_line {
        let [a, b, c] = line.indices();
        out.push_str(&format!(" (line {a}-{b}-{c})"));
    }
    out.push('\n');
    for entry in &view.move_entries {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("\n{marker} {}", entry.label));
    }
    out
}

/// Renders a view as pretty-printed JSON.
pub fn render_json(view: &ViewModel<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
