//! Walking the line between two squares for sliding pieces.

use std::iter;

use crate::boardrepr::Mailbox;
use crate::coretypes::Square;

/// Unit (file, rank) step leading from `from` toward `to`, when the two
/// squares share a file, rank, or diagonal. None otherwise, or if equal.
pub(crate) fn direction(from: Square, to: Square) -> Option<(i8, i8)> {
    let (df, dr) = from.delta(to);
    let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
    (aligned && (df, dr) != (0, 0)).then(|| (df.signum(), dr.signum()))
}

/// Squares strictly between `from` and `to`, walking from `from`.
/// Empty when the squares are adjacent or not aligned.
pub(crate) fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let step = direction(from, to);
    let next = move |square: &Square| step.and_then(|(df, dr)| square.offset(df, dr));

    iter::successors(next(&from), next).take_while(move |square| *square != to)
}

/// Returns true if no piece stands between `from` and `to`.
pub(crate) fn is_path_clear(board: &Mailbox, from: Square, to: Square) -> bool {
    between(from, to).all(|square| board.is_empty(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color::*, Piece, PieceKind::*, Square::*};

    #[test]
    fn directions_of_aligned_squares() {
        assert_eq!(direction(A1, A8), Some((0, 1)));
        assert_eq!(direction(H1, A1), Some((-1, 0)));
        assert_eq!(direction(A1, H8), Some((1, 1)));
        assert_eq!(direction(H1, A8), Some((-1, 1)));
        assert_eq!(direction(E4, E4), None);
        assert_eq!(direction(G1, F3), None);
    }

    #[test]
    fn between_is_exclusive() {
        let squares: Vec<Square> = between(A1, D4).collect();
        assert_eq!(squares, vec![B2, C3]);

        let squares: Vec<Square> = between(E8, E4).collect();
        assert_eq!(squares, vec![E7, E6, E5]);

        assert_eq!(between(E4, E5).count(), 0);
        assert_eq!(between(G1, F3).count(), 0);
        assert_eq!(between(C3, C3).count(), 0);
    }

    #[test]
    fn blocked_paths() {
        let mut board = Mailbox::new();
        board[C3] = Some(Piece::new(Black, Pawn));

        assert!(!is_path_clear(&board, A1, H8));
        assert!(is_path_clear(&board, A1, C3));
        assert!(!is_path_clear(&board, C1, C8));
        assert!(is_path_clear(&board, A1, A8));
    }
}
