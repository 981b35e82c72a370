//! Rules engine for two-player chess.
//!
//! Decides whether a move is legal, applies it, and reports check and
//! checkmate. Castling, en passant, promotion, and draws are not part of
//! these rules.

pub mod boardrepr;
pub mod check;
pub mod coretypes;
pub mod error;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod movelist;
pub mod snapshot;

pub use boardrepr::Mailbox;
pub use check::{is_in_check, is_in_checkmate};
pub use game::{GameEvent, GameState, MoveOutcome, Rejection};
pub use movegen::{is_legal, legal_destinations};
