//! Position decoding: FEN board fields and engine code arrays to placements.
//!
//! Both decoders emit squares on the *visual* grid. When the orientation is
//! flipped the logical (rank, file) is rotated as it is computed, so a single
//! pass produces the drawable layout.

use crate::domain::{Orientation, Piece, Square};

/// FEN of the standard starting position.
pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Draw `piece` on visual square `square`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece: Piece,
    pub square: Square,
}

/// Resolve a logical (rank, file) to its visual square under `orientation`.
fn place(rank: u8, file: u8, orientation: Orientation) -> Option<Square> {
    match Square::new(rank, file) {
        Ok(square) => Some(orientation.apply(square)),
        Err(err) => {
            tracing::warn!("[DECODE] Skipping placement: {}", err);
            None
        }
    }
}

/// Decode the piece-placement field of a FEN string.
///
/// Scanning stops at the first space; the remaining fields belong to the
/// engine. Unknown characters are reported and skipped.
pub fn decode_fen(fen: &str, orientation: Orientation) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(32);
    let mut rank: u8 = 8;
    let mut file: u8 = 1;

    for ch in fen.chars() {
        if ch == ' ' {
            break;
        }
        if let Some(skip) = ch.to_digit(10) {
            file = file.saturating_add(skip as u8);
        } else if ch == '/' {
            rank = rank.saturating_sub(1);
            file = 1;
        } else if ch.is_ascii_alphabetic() {
            match Piece::from_fen_char(ch) {
                Some(piece) => {
                    if let Some(square) = place(rank, file, orientation) {
                        placements.push(Placement { piece, square });
                    }
                }
                None => tracing::warn!("[DECODE] Unknown piece letter {:?} in FEN", ch),
            }
            file = file.saturating_add(1);
        } else {
            tracing::warn!("[DECODE] Unexpected character {:?} in FEN", ch);
        }
    }

    placements
}

/// Decode a 64-entry code array in a8..h1 order. Code 0 is an empty square.
pub fn decode_position_array(codes: &[u8; 64], orientation: Orientation) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(32);

    for (index, &code) in codes.iter().enumerate() {
        if code == 0 {
            continue;
        }
        let Some(piece) = Piece::from_code(code) else {
            tracing::warn!("[DECODE] Unknown piece code {} at index {}", code, index);
            continue;
        };
        let rank = ((64 - (index + 1)) / 8 + 1) as u8;
        let file = (index % 8 + 1) as u8;
        if let Some(square) = place(rank, file, orientation) {
            placements.push(Placement { piece, square });
        }
    }

    placements
}

/// The placement field of a FEN string (everything before the first space).
pub fn board_field(fen: &str) -> &str {
    fen.split(' ').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PieceColor, PieceKind};

    fn at(placements: &[Placement], label: &str) -> Option<char> {
        placements
            .iter()
            .find(|p| p.square.label() == label)
            .map(|p| p.piece.fen_char())
    }

    fn flipped() -> Orientation {
        let mut orientation = Orientation::default();
        orientation.recompute(false, false);
        orientation
    }

    #[test]
    fn test_decode_standard_fen() {
        let placements = decode_fen(board_field(STANDARD_FEN), Orientation::default());
        assert_eq!(placements.len(), 32);

        for file in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'] {
            assert_eq!(at(&placements, &format!("{file}2")), Some('P'));
            assert_eq!(at(&placements, &format!("{file}7")), Some('p'));
        }

        let back_rank = |rank: char| -> String {
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']
                .iter()
                .filter_map(|f| at(&placements, &format!("{f}{rank}")))
                .collect()
        };
        assert_eq!(back_rank('1'), "RNBQKBNR");
        assert_eq!(back_rank('8'), "rnbqkbnr");
    }

    #[test]
    fn test_decode_stops_at_space() {
        let placements = decode_fen(STANDARD_FEN, Orientation::default());
        assert_eq!(placements.len(), 32);
    }

    #[test]
    fn test_decode_fen_digits() {
        let placements = decode_fen("8/8/8/8/4P3/8/8/k6K", Orientation::default());
        assert_eq!(placements.len(), 3);
        assert_eq!(at(&placements, "e4"), Some('P'));
        assert_eq!(at(&placements, "a1"), Some('k'));
        assert_eq!(at(&placements, "h1"), Some('K'));
    }

    #[test]
    fn test_decode_fen_skips_unknown_characters() {
        let placements = decode_fen("4k3/8/8/8/8/8/8/4K2R*", Orientation::default());
        assert_eq!(placements.len(), 3);

        // an unknown letter still occupies a file
        let placements = decode_fen("xk6/8/8/8/8/8/8/8", Orientation::default());
        assert_eq!(at(&placements, "b8"), Some('k'));

        // squares pushed off the board are dropped, not fatal
        let placements = decode_fen("8K/8/8/8/8/8/8/k7", Orientation::default());
        assert_eq!(placements.len(), 1);
        assert_eq!(at(&placements, "a1"), Some('k'));
    }

    #[test]
    fn test_decode_fen_flipped() {
        let placements = decode_fen("8/8/8/8/4P3/8/8/8", flipped());
        assert_eq!(placements.len(), 1);
        assert_eq!(at(&placements, "d5"), Some('P'));
    }

    #[test]
    fn test_decode_position_array_corners() {
        let mut codes = [0u8; 64];
        codes[0] = 7;
        codes[7] = 11;
        codes[56] = 8;
        codes[63] = 2;

        let placements = decode_position_array(&codes, Orientation::default());
        assert_eq!(placements.len(), 4);
        assert_eq!(at(&placements, "a8"), Some('r'));
        assert_eq!(at(&placements, "h8"), Some('k'));
        assert_eq!(at(&placements, "a1"), Some('R'));

        let h1 = placements.iter().find(|p| p.square.label() == "h1").unwrap();
        assert_eq!(h1.piece, Piece::new(PieceKind::Pawn, PieceColor::White));
    }

    #[test]
    fn test_decode_position_array_flipped() {
        let mut codes = [0u8; 64];
        codes[63] = 2;
        let placements = decode_position_array(&codes, flipped());
        assert_eq!(at(&placements, "a8"), Some('P'));
    }

    #[test]
    fn test_decode_position_array_skips_unknown_codes() {
        let mut codes = [0u8; 64];
        codes[10] = 42;
        codes[11] = 12;
        let placements = decode_position_array(&codes, Orientation::default());
        assert_eq!(placements.len(), 1);
        assert_eq!(at(&placements, "d7"), Some('K'));
    }

    #[test]
    fn test_decoders_agree() {
        let from_fen = decode_fen(board_field(STANDARD_FEN), Orientation::default());
        let mut codes = [0u8; 64];
        for placement in &from_fen {
            codes[placement.square.index()] = placement.piece.code();
        }
        let from_codes = decode_position_array(&codes, Orientation::default());
        assert_eq!(from_fen.len(), from_codes.len());
        for placement in &from_codes {
            assert!(from_fen.contains(placement));
        }
    }
}
