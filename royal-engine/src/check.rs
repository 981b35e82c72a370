//! Check and checkmate detection.
//!
//! A king is in check when some opposing piece could legally move onto its
//! square. Because legality itself asks whether the mover's king ends up in
//! check, [`is_in_check`] and [`crate::movegen::is_legal`] call each other.
//! The recursion terminates: every nested call inspects a board on which one
//! more king has already been captured, and a color without a king is never
//! in check.
//!
//! A consequence worth knowing: a piece pinned against its own king does not
//! give check, since capturing the enemy king would expose its own.

use tracing::trace;

use crate::boardrepr::Mailbox;
use crate::coretypes::{Color, Piece, PieceKind, Square};
use crate::movegen::{is_legal, legal_destinations};

/// Returns the square of the king of `color`. If there are several, the first
/// found scanning A1 to H8 is returned.
pub fn king_square(board: &Mailbox, color: Color) -> Option<Square> {
    board.find(Piece::new(color, PieceKind::King))
}

/// Returns true if the king of `color` could be captured by an opposing piece.
/// A board without a king of `color` is never in check.
pub fn is_in_check(board: &Mailbox, color: Color) -> bool {
    let king = match king_square(board, color) {
        Some(king) => king,
        None => return false,
    };

    board
        .occupied_by(!color)
        .any(|attacker| is_legal(board, attacker, king))
}

/// Returns true if `color` is in check and no move of any of its pieces
/// escapes the check.
pub fn is_in_checkmate(board: &Mailbox, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }

    let escape = board.occupied_by(color).find_map(|from| {
        legal_destinations(board, from)
            .into_iter()
            .find(|&to| !is_in_check(&board.with_move(from, to), color))
            .map(|to| (from, to))
    });

    match escape {
        Some((from, to)) => {
            trace!(%color, %from, %to, "check can be escaped");
            false
        }
        None => true,
    }
}
