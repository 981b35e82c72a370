//! Game structure.
//!
//! GameState is an immutable value describing a game in progress. Moves are
//! applied with [`GameState::submit_move`], which returns a new GameState and
//! never touches the one it was called on.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::boardrepr::Mailbox;
use crate::check::{is_in_check, is_in_checkmate};
use crate::coretypes::{Color, Move, MoveInfo, Square};
use crate::movegen;
use crate::movelist::{CapturedPieces, Destinations, MoveHistory};

/// GameState contains everything needed to continue a game:
/// * board - placement of every piece.
/// * turn - Color of player whose turn it is.
/// * is_check - the player to move is in check.
/// * is_checkmate - the player to move is checkmated and the game is over.
/// * move_history - every committed move, oldest first.
/// * captured_pieces - every captured piece, in the order taken.
///
/// The check flags always describe `board` from the point of view of `turn`
/// and are only ever recomputed when a move is committed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) board: Mailbox,
    pub(crate) turn: Color,
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
    pub(crate) move_history: MoveHistory,
    #[serde(default)]
    pub(crate) captured_pieces: CapturedPieces,
}

/// Reasons a move can be turned down. Rejections are ordinary outcomes of
/// play, and leave the game state as it was.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// There is no piece on the source square.
    EmptySquare(Square),
    /// The piece on the source square belongs to the player not on turn.
    WrongTurn(Color),
    /// The move breaks the piece's pattern, captures an own piece, or leaves
    /// the mover's king in check.
    IllegalMove(Move),
    /// The game ended in checkmate. No further moves are accepted.
    GameOver,
}

/// Notifications raised by an accepted move, for presentation layers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameEvent {
    /// The player to move is now in check.
    Check(Color),
    /// The player to move is checkmated by `winner`.
    Checkmate { winner: Color },
}

/// The result of an accepted move: the new state and what happened.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the standard chess start position, white to move.
    pub fn start_position() -> Self {
        Self::from(Mailbox::start_position())
    }

    /// Create a game from an arbitrary board with `turn` to move.
    /// Check flags are computed for `turn`, history starts empty.
    pub fn with_board(board: Mailbox, turn: Color) -> Self {
        Self {
            board,
            turn,
            is_check: is_in_check(&board, turn),
            is_checkmate: is_in_checkmate(&board, turn),
            move_history: MoveHistory::new(),
            captured_pieces: CapturedPieces::new(),
        }
    }

    /// Const getters.
    pub fn board(&self) -> &Mailbox {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn is_check(&self) -> bool {
        self.is_check
    }
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }
    pub fn move_history(&self) -> &MoveHistory {
        &self.move_history
    }
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured_pieces
    }

    /// Returns true once the game has ended in checkmate.
    pub fn is_over(&self) -> bool {
        self.is_checkmate
    }

    /// The player who delivered checkmate, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.is_checkmate.then(|| !self.turn)
    }

    /// Returns true if the piece on `from` may legally move to `to`,
    /// ignoring whose turn it is.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        movegen::is_legal(&self.board, from, to)
    }

    /// Legal target squares for the piece on `from`, of either color.
    pub fn legal_destinations(&self, from: Square) -> Destinations {
        movegen::legal_destinations(&self.board, from)
    }

    /// Legal target squares for a piece the player on turn selects.
    /// Empty if `square` does not hold a piece of the player on turn.
    pub fn possible_moves(&self, square: Square) -> Destinations {
        match self.board[square] {
            Some(piece) if piece.color == self.turn => self.legal_destinations(square),
            _ => Destinations::new(),
        }
    }

    /// Validate and play a move, returning the resulting state.
    /// On rejection, self is unchanged and the reason is returned.
    pub fn submit_move(&self, from: Square, to: Square) -> Result<MoveOutcome, Rejection> {
        let move_ = Move::new(from, to);
        let rejected = |rejection: Rejection| -> Result<MoveOutcome, Rejection> {
            debug!(%move_, ?rejection, "move rejected");
            Err(rejection)
        };

        if self.is_over() {
            return rejected(Rejection::GameOver);
        }
        let piece = match self.board[from] {
            Some(piece) => piece,
            None => return rejected(Rejection::EmptySquare(from)),
        };
        if piece.color != self.turn {
            return rejected(Rejection::WrongTurn(piece.color));
        }
        if !self.is_legal(from, to) {
            return rejected(Rejection::IllegalMove(move_));
        }

        let mut captured_pieces = self.captured_pieces.clone();
        if let Some(captured) = self.board[to] {
            captured_pieces.push(captured);
        }

        let board = self.board.with_move(from, to);
        let turn = !self.turn;
        let is_check = is_in_check(&board, turn);
        let is_checkmate = is_check && is_in_checkmate(&board, turn);

        let mut move_history = self.move_history.clone();
        move_history.push(MoveInfo::new(move_, piece));

        let mut events = Vec::new();
        if is_check {
            info!(player = turn.name(), "check");
            events.push(GameEvent::Check(turn));
        }
        if is_checkmate {
            info!(winner = self.turn.name(), "checkmate");
            events.push(GameEvent::Checkmate { winner: self.turn });
        }
        debug!(%move_, %piece, ply = move_history.len(), "move committed");

        let state = Self {
            board,
            turn,
            is_check,
            is_checkmate,
            move_history,
            captured_pieces,
        };
        Ok(MoveOutcome { state, events })
    }

    /// Play a move in place. On rejection self is left untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Vec<GameEvent>, Rejection> {
        let MoveOutcome { state, events } = self.submit_move(from, to)?;
        *self = state;
        Ok(events)
    }
}

/// Convert a board to a Game with white to move and no past moves.
impl From<Mailbox> for GameState {
    fn from(board: Mailbox) -> Self {
        Self::with_board(board, Color::White)
    }
}

/// Defaults to standard chess start position.
impl Default for GameState {
    fn default() -> Self {
        Self::start_position()
    }
}

/// Displays pretty-printed chess board and the player to move.
impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, " {} to move", self.turn.name())?;
        if self.is_checkmate {
            write!(f, ", CHECKMATE")?;
        } else if self.is_check {
            write!(f, ", CHECK")?;
        }
        writeln!(f)
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::EmptySquare(square) => write!(f, "no piece on {square}"),
            Rejection::WrongTurn(color) => write!(f, "it is not {}'s turn", color.name()),
            Rejection::IllegalMove(move_) => write!(f, "{move_} is not a legal move"),
            Rejection::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for Rejection {}

impl Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEvent::Check(color) => write!(f, "{} is in check!", color.name()),
            GameEvent::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner.name()),
        }
    }
}
