//! List types used in Royal engine.
//!
//! Type aliases keep the underlying containers easy to change.

use arrayvec::ArrayVec;

use crate::coretypes::{MoveInfo, Piece, Square, NUM_SQUARES};

/// Destinations holds the legal target squares of one piece.
/// A piece can never reach more squares than the board has.
pub type Destinations = ArrayVec<Square, NUM_SQUARES>;
/// MoveHistory is the append-only record of every committed move of a game.
pub type MoveHistory = Vec<MoveInfo>;
/// CapturedPieces lists captured pieces in the order they were taken.
pub type CapturedPieces = Vec<Piece>;
