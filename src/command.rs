//! Commands accepted at the terminal prompt.

use royal_engine::coretypes::{Move, Square};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Exit,
    Newgame,
    Help,
    Board,
    Captured,
    History,
    Score,
    Save,
    Moves(Square),
    GameMove(Move),
    Error(String),
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(move_) = s.parse::<Move>() {
            return Self::GameMove(move_);
        }

        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("exit" | "quit"), None, None) => Self::Exit,
            (Some("newgame" | "ng"), None, None) => Self::Newgame,
            (Some("help"), None, None) => Self::Help,
            (Some("board"), None, None) => Self::Board,
            (Some("captured"), None, None) => Self::Captured,
            (Some("history"), None, None) => Self::History,
            (Some("score"), None, None) => Self::Score,
            (Some("save"), None, None) => Self::Save,
            (Some("moves"), Some(square), None) => match square.parse() {
                Ok(square) => Self::Moves(square),
                Err(err) => Self::Error(format!("{square}: {err}")),
            },
            _ => Self::Error(s.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
e2e4            => Move the piece on e2 to e4.
moves <square>  => List where the piece on <square> may move.
board           => Print the board.
captured        => List captured pieces.
history         => List moves played this game.
score           => Print wins for each player.
save            => Write the game to the save file.
newgame | ng    => Begin a new game. Scores are kept.
help            => Print this help text.
exit            => End the session.";
