//! A local two-player session: one game at a time, a running score, and an
//! optional save file that tracks the game in progress.

use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, info, warn};

use royal_engine::coretypes::{Color, Square};
use royal_engine::movelist::Destinations;
use royal_engine::{snapshot, GameEvent, GameState, Rejection};

/// Length of generated game ids.
pub const GAME_ID_LEN: usize = 21;

/// Create a random alphanumeric game id.
pub fn new_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GAME_ID_LEN)
        .map(char::from)
        .collect()
}

/// Games won by each player over a session.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    white: u32,
    black: u32,
}

impl Score {
    pub fn wins(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn record_win(&mut self, winner: Color) {
        match winner {
            Color::White => self.white += 1,
            Color::Black => self.black += 1,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "White {} - {} Black", self.white, self.black)
    }
}

pub struct Session {
    game_id: String,
    game: GameState,
    score: Score,
    save_path: Option<PathBuf>,
}

impl Session {
    /// Start a session with a fresh game.
    pub fn new(game_id: String, save_path: Option<PathBuf>) -> Self {
        info!(%game_id, "session started");
        Self {
            game_id,
            game: GameState::start_position(),
            score: Score::default(),
            save_path,
        }
    }

    /// Resume a session from a snapshot file.
    pub fn load(path: &Path, game_id: String, save_path: Option<PathBuf>) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let game = snapshot::from_json(&json)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        info!(%game_id, path = %path.display(), plies = game.move_history().len(), "session resumed");

        Ok(Self {
            game_id,
            game,
            score: Score::default(),
            save_path,
        })
    }

    /// Const getters.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }
    pub fn game(&self) -> &GameState {
        &self.game
    }
    pub fn score(&self) -> Score {
        self.score
    }

    /// Legal destinations for the piece on `square`, if it belongs to the player on turn.
    pub fn moves(&self, square: Square) -> Destinations {
        self.game.possible_moves(square)
    }

    /// Submit a move for the player on turn.
    ///
    /// An accepted move is autosaved. A move that delivers checkmate scores
    /// the win for its player, deletes the save file, and begins a new game,
    /// so the returned events are the only record of the finished game.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Vec<GameEvent>, Rejection> {
        let events = self.game.apply_move(from, to)?;

        match self.game.winner() {
            Some(winner) => {
                self.score.record_win(winner);
                info!(game_id = %self.game_id, winner = winner.name(), score = %self.score, "game over");
                self.remove_save();
                self.game = GameState::start_position();
            }
            None => self.autosave(),
        }
        Ok(events)
    }

    /// Abandon the current game and start another. The score is kept.
    pub fn new_game(&mut self) {
        debug!(game_id = %self.game_id, "new game");
        self.game = GameState::start_position();
        self.autosave();
    }

    /// Write the current game to the save file.
    /// Returns false if the session has no save file.
    pub fn save(&self) -> io::Result<bool> {
        let path = match &self.save_path {
            Some(path) => path,
            None => return Ok(false),
        };
        let json = snapshot::to_json_pretty(&self.game)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "game saved");
        Ok(true)
    }

    fn autosave(&self) {
        if let Err(err) = self.save() {
            warn!(%err, "autosave failed");
        }
    }

    fn remove_save(&self) {
        if let Some(path) = &self.save_path {
            match fs::remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "save file removed"),
                Err(err) if err.kind() == io::ErrorKind::NotFound => (),
                Err(err) => warn!(%err, "could not remove save file"),
            }
        }
    }
}
