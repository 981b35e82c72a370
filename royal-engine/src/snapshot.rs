//! Snapshots are the structured JSON record of a [`GameState`], for sending
//! a game to a remote peer or persisting it between sessions.
//!
//! ```json
//! {
//!   "board": { "a1": { "piece": "r", "color": "w" }, "a3": null, ... },
//!   "turn": "w",
//!   "isCheck": false,
//!   "isCheckmate": false,
//!   "moveHistory": [ { "from": "e2", "to": "e4", "piece": { "piece": "p", "color": "w" } } ],
//!   "capturedPieces": []
//! }
//! ```
//!
//! Decoding trusts the record: the decoded state becomes the authoritative
//! current state without replaying its history.

use crate::error;
use crate::game::GameState;

/// Encode a game state as compact JSON.
pub fn to_json(state: &GameState) -> error::Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Encode a game state as indented JSON, for files meant to be read by people.
pub fn to_json_pretty(state: &GameState) -> error::Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Decode a game state from JSON. Board squares absent from the record are empty.
pub fn from_json(json: &str) -> error::Result<GameState> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a game state as a `serde_json::Value`, for embedding in a larger message.
pub fn to_value(state: &GameState) -> error::Result<serde_json::Value> {
    Ok(serde_json::to_value(state)?)
}

/// Decode a game state out of a `serde_json::Value`.
pub fn from_value(value: serde_json::Value) -> error::Result<GameState> {
    Ok(serde_json::from_value(value)?)
}
