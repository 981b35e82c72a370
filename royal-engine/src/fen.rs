//! [Forsyth-Edwards Notation](https://www.chessprogramming.org/Forsyth-Edwards_Notation)
//! for board setups.
//!
//! Only the piece placement and side to move fields carry meaning under these
//! rules. Castling, en passant, and clock fields are accepted and ignored so
//! that complete FEN strings from other tools can be read.

use std::convert::TryFrom;

use crate::boardrepr::Mailbox;
use crate::coretypes::{Color, File, Piece, Rank, Square, NUM_FILES, NUM_RANKS};
use crate::error::{self, ErrorKind};
use crate::game::GameState;

pub trait Fen: Sized {
    /// Parse a FEN string into Self.
    fn parse_fen(s: &str) -> error::Result<Self>;
    /// Write Self as a FEN string.
    fn to_fen(&self) -> String;
}

/// Placement ::= rank8 '/' rank7 '/' ... '/' rank1
impl Fen for Mailbox {
    fn parse_fen(s: &str) -> error::Result<Self> {
        let placement = s.split_whitespace().next().ok_or(ErrorKind::Fen)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != NUM_RANKS {
            return Err((ErrorKind::Fen, "placement needs 8 ranks").into());
        }

        let mut mb = Mailbox::new();
        for (rank_str, rank_idx) in ranks.iter().zip((0..NUM_RANKS as u8).rev()) {
            let rank = Rank::from_u8(rank_idx).ok_or(ErrorKind::Fen)?;
            let mut file_idx: u8 = 0;

            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file_idx = file_idx.saturating_add(skip as u8);
                } else {
                    let file = File::from_u8(file_idx)
                        .ok_or((ErrorKind::Fen, format!("rank {rank} overflows")))?;
                    mb[Square::from((file, rank))] = Some(Piece::try_from(ch)?);
                    file_idx += 1;
                }
            }
            if file_idx as usize != NUM_FILES {
                return Err((ErrorKind::Fen, format!("rank {rank} does not have 8 files")).into());
            }
        }
        Ok(mb)
    }

    fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(71);
        for rank in (0..NUM_RANKS).rev() {
            let mut empty = 0;
            for file in 0..NUM_FILES {
                match self[rank * NUM_FILES + file] {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(char::from(piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }
        placement
    }
}

/// Fen ::= Placement ' ' Side [' ' ignored fields]
/// Side to move defaults to white when absent.
impl Fen for GameState {
    fn parse_fen(s: &str) -> error::Result<Self> {
        let board = Mailbox::parse_fen(s)?;
        let turn = match s.split_whitespace().nth(1) {
            Some(side) if side.chars().count() == 1 => {
                Color::try_from(side.chars().next().ok_or(ErrorKind::Fen)?)?
            }
            Some(side) => return Err((ErrorKind::Fen, format!("bad side to move {side}")).into()),
            None => Color::White,
        };
        Ok(GameState::with_board(board, turn))
    }

    fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color::*, PieceKind::*, Square::*};

    const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn parse_start_position() {
        let mb = Mailbox::parse_fen(START_PLACEMENT).unwrap();
        assert_eq!(mb, Mailbox::start_position());
        assert_eq!(mb.to_fen(), START_PLACEMENT);
    }

    #[test]
    fn parse_full_fen_string() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 b KQkq - 0 1";
        let game = GameState::parse_fen(fen).unwrap();
        assert_eq!(game.turn(), Black);
        assert_eq!(game.board()[A1], Some(Piece::new(White, Rook)));
        assert_eq!(game.board()[E8], Some(Piece::new(Black, King)));
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/R3K3 b");
    }

    #[test]
    fn parsed_game_computes_flags() {
        let game = GameState::parse_fen("4k3/8/8/8/8/8/8/4R1K1 b").unwrap();
        assert!(game.is_check());
        assert!(!game.is_checkmate());
    }

    #[test]
    fn malformed_placements() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/9",
            "8/8/8/8/8/8/8/7",
            "8/8/8/8/8/8/8/ppppppppp",
            "8/8/8/8/8/8/8/7x",
        ] {
            assert!(Mailbox::parse_fen(bad).is_err(), "{bad:?} should not parse");
        }
        assert!(GameState::parse_fen("8/8/8/8/8/8/8/8 white").is_err());
    }
}
