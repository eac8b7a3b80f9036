//! PGN move-text assembly and document writing.
//!
//! Fragments are built one half-move at a time from the position before and
//! after the move, so the session can keep a running record without any
//! replay. Piece moves are never disambiguated.

use chrono::Local;

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{file_of, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::GameStatus;
use crate::move_generation::legal_move_apply::describe_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::square_to_algebraic;

/// Move-text fragment for `origin -> target` played from `before`.
///
/// `after` and `status` describe the resulting position. `first_in_record`
/// marks the opening fragment of a record, which needs a `{n}...` prefix
/// when Black moves first.
pub fn move_fragment(
    before: &BoardState,
    origin: Square,
    target: Square,
    after: &BoardState,
    status: GameStatus,
    first_in_record: bool,
) -> ChessResult<String> {
    let facts = describe_move(before, origin, target)?;
    let mut out = String::new();

    if before.is_whites_turn() {
        out.push_str(&format!("{}. ", before.move_number()));
    } else if first_in_record {
        out.push_str(&format!("{}... ", before.move_number()));
    }

    if let Some(lane) = facts.castle {
        out.push_str(if file_of(lane.king_to) > file_of(lane.king_from) {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        if facts.kind != PieceKind::Pawn {
            out.push(facts.kind.fen_char().to_ascii_uppercase());
        }
        if facts.is_capture() {
            if facts.kind == PieceKind::Pawn {
                out.push(char::from(b'a' + file_of(origin)));
            }
            out.push('x');
        }
        out.push_str(&square_to_algebraic(target)?);
        if facts.promotion {
            out.push_str("=Q");
        }
    }

    match status {
        GameStatus::Checkmate => {
            out.push_str("# ");
            out.push_str(status.result_token(after.side_to_move()));
        }
        _ if status.is_draw() => out.push_str(" 1/2-1/2"),
        _ => {
            if is_king_in_check(after, after.side_to_move()) {
                out.push('+');
            }
        }
    }

    Ok(out)
}

/// Joins fragments with single spaces.
pub fn join_move_text(fragments: &[String]) -> String {
    fragments.join(" ")
}

/// Full PGN document with Seven-Tag-Roster headers.
///
/// `SetUp` and `FEN` headers are added when the game did not start from the
/// standard position.
pub fn write_pgn(
    initial_state: &BoardState,
    move_text: &str,
    result: &str,
    white: &str,
    black: &str,
) -> String {
    let mut headers: Vec<(&str, String)> = vec![
        ("Event", "Ruleboard Game".to_owned()),
        ("Site", "Local".to_owned()),
        ("Date", Local::now().format("%Y.%m.%d").to_string()),
        ("Round", "-".to_owned()),
        ("White", white.to_owned()),
        ("Black", black.to_owned()),
        ("Result", result.to_owned()),
    ];

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.push(("SetUp", "1".to_owned()));
        headers.push(("FEN", initial_fen));
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let trimmed = move_text.trim();
    if trimmed.is_empty() {
        out.push_str(result);
    } else if trimmed.ends_with(result) {
        out.push_str(trimmed);
    } else {
        out.push_str(trimmed);
        out.push(' ');
        out.push_str(result);
    }
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
