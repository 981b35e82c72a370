//! Move legality and destination generation.
//!
//! A move is legal when the moving piece's pattern allows it, the target is
//! not occupied by a piece of the same color, and the mover's own king is not
//! in check once the move has been played. Whose turn it is plays no part
//! here; turn order is enforced by [`crate::game::GameState`].

use crate::boardrepr::Mailbox;
use crate::check::is_in_check;
use crate::coretypes::{Color, Piece, PieceKind::*, Square};
use crate::movelist::Destinations;

pub(crate) mod rays;

/// Returns true if the piece on `from` may legally move to `to`.
/// An empty `from` square has no legal moves.
///
/// The pattern is tested before king safety because it is far cheaper.
/// Both are pure, so the set of accepted moves does not depend on the order.
pub fn is_legal(board: &Mailbox, from: Square, to: Square) -> bool {
    let piece = match board[from] {
        Some(piece) => piece,
        None => return false,
    };

    // No self capture. This also rejects from == to.
    if let Some(target) = board[to] {
        if target.color == piece.color {
            return false;
        }
    }

    follows_pattern(board, piece, from, to) && !is_in_check(&board.with_move(from, to), piece.color)
}

/// Returns every square the piece on `from` may legally move to, in A1 to H8 order.
pub fn legal_destinations(board: &Mailbox, from: Square) -> Destinations {
    if board.is_empty(from) {
        return Destinations::new();
    }
    Square::iter()
        .filter(|&to| is_legal(board, from, to))
        .collect()
}

/// Returns true if the movement pattern of `piece` takes it from `from` to `to`,
/// considering occupancy but not king safety.
pub(crate) fn follows_pattern(board: &Mailbox, piece: Piece, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    match piece.piece_kind {
        Pawn => pawn_pattern(board, piece.color, from, to),
        Knight => knight_pattern(df, dr),
        Bishop => bishop_pattern(df, dr) && rays::is_path_clear(board, from, to),
        Rook => rook_pattern(df, dr) && rays::is_path_clear(board, from, to),
        Queen => {
            (bishop_pattern(df, dr) || rook_pattern(df, dr)) && rays::is_path_clear(board, from, to)
        }
        King => king_pattern(df, dr),
    }
}

/// Pawns capture one square diagonally forward, and push straight forward
/// onto empty squares only. A pawn on its home rank may push two squares if
/// both squares are empty.
fn pawn_pattern(board: &Mailbox, color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let forward = color.pawn_direction();

    if !board.is_empty(to) {
        return df.abs() == 1 && dr == forward;
    }
    if df != 0 {
        return false;
    }
    if dr == forward {
        return true;
    }
    dr == 2 * forward && from.rank() == color.pawn_home_rank() && rays::is_path_clear(board, from, to)
}

fn knight_pattern(df: i8, dr: i8) -> bool {
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

fn bishop_pattern(df: i8, dr: i8) -> bool {
    df != 0 && df.abs() == dr.abs()
}

fn rook_pattern(df: i8, dr: i8) -> bool {
    (df == 0) != (dr == 0)
}

fn king_pattern(df: i8, dr: i8) -> bool {
    df.abs() <= 1 && dr.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color::*, Square::*};

    fn lone(piece: Piece, square: Square) -> Mailbox {
        Mailbox::with_pieces([(square, piece)])
    }

    #[test]
    fn knight_pattern_offsets() {
        let board = lone(Piece::new(White, Knight), D4);
        let expected = [B3, F3, C2, E2, B5, F5, C6, E6];
        for to in Square::iter() {
            let reachable = follows_pattern(&board, Piece::new(White, Knight), D4, to);
            assert_eq!(reachable, expected.contains(&to), "knight d4 -> {to}");
        }
    }

    #[test]
    fn sliding_patterns_on_empty_board() {
        for to in Square::iter() {
            let (df, dr) = D4.delta(to);
            let diagonal = df != 0 && df.abs() == dr.abs();
            let straight = (df == 0) != (dr == 0);

            let bishop = Piece::new(White, Bishop);
            let rook = Piece::new(White, Rook);
            let queen = Piece::new(White, Queen);
            assert_eq!(follows_pattern(&lone(bishop, D4), bishop, D4, to), diagonal);
            assert_eq!(follows_pattern(&lone(rook, D4), rook, D4, to), straight);
            assert_eq!(
                follows_pattern(&lone(queen, D4), queen, D4, to),
                diagonal || straight
            );
        }
    }

    #[test]
    fn pawn_patterns() {
        let white_pawn = Piece::new(White, Pawn);
        let black_pawn = Piece::new(Black, Pawn);

        let board = lone(white_pawn, E2);
        assert!(follows_pattern(&board, white_pawn, E2, E3));
        assert!(follows_pattern(&board, white_pawn, E2, E4));
        assert!(!follows_pattern(&board, white_pawn, E2, E5));
        assert!(!follows_pattern(&board, white_pawn, E2, E1));
        assert!(!follows_pattern(&board, white_pawn, E2, D3));

        let board = lone(white_pawn, E3);
        assert!(follows_pattern(&board, white_pawn, E3, E4));
        assert!(!follows_pattern(&board, white_pawn, E3, E5));

        let board = lone(black_pawn, D7);
        assert!(follows_pattern(&board, black_pawn, D7, D6));
        assert!(follows_pattern(&board, black_pawn, D7, D5));
        assert!(!follows_pattern(&board, black_pawn, D7, D8));
    }

    #[test]
    fn pawn_captures_need_a_target() {
        let white_pawn = Piece::new(White, Pawn);
        let mut board = lone(white_pawn, E4);
        board[D5] = Some(Piece::new(Black, Knight));
        board[E5] = Some(Piece::new(Black, Knight));

        assert!(follows_pattern(&board, white_pawn, E4, D5));
        assert!(!follows_pattern(&board, white_pawn, E4, F5));
        assert!(!follows_pattern(&board, white_pawn, E4, E5));
    }

    #[test]
    fn pawn_double_push_needs_clear_path() {
        let white_pawn = Piece::new(White, Pawn);
        let mut board = lone(white_pawn, C2);
        board[C3] = Some(Piece::new(Black, Bishop));

        assert!(!follows_pattern(&board, white_pawn, C2, C4));
        assert!(!follows_pattern(&board, white_pawn, C2, C3));
    }

    #[test]
    fn king_pattern_single_steps() {
        let king = Piece::new(Black, King);
        let board = lone(king, A8);
        let reachable: Vec<Square> = Square::iter()
            .filter(|&to| to != A8 && follows_pattern(&board, king, A8, to))
            .collect();
        assert_eq!(reachable, vec![A7, B7, B8]);
    }

    #[test]
    fn empty_source_has_no_moves() {
        let board = Mailbox::start_position();
        assert!(!is_legal(&board, E4, E5));
        assert!(legal_destinations(&board, E4).is_empty());
    }

    #[test]
    fn start_position_destinations() {
        let board = Mailbox::start_position();
        assert_eq!(legal_destinations(&board, G1).as_slice(), &[F3, H3]);
        assert_eq!(legal_destinations(&board, E2).as_slice(), &[E3, E4]);
        assert_eq!(legal_destinations(&board, E7).as_slice(), &[E5, E6]);
        assert!(legal_destinations(&board, A1).is_empty());
        assert!(legal_destinations(&board, D1).is_empty());
    }
}
