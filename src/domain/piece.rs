//! Piece types, the engine's numeric piece codes and FEN letters.
//! No GPUI dependencies - this is the domain layer.

use shakmaty::{Color as SColor, Role};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// Engine piece codes, indexed by code. 0 is an empty square, odd codes are
/// black, even codes are white, and kinds ascend pawn..king.
pub const PIECE_CODES: [Option<Piece>; 13] = [
    None,
    Some(Piece::new(PieceKind::Pawn, PieceColor::Black)),
    Some(Piece::new(PieceKind::Pawn, PieceColor::White)),
    Some(Piece::new(PieceKind::Knight, PieceColor::Black)),
    Some(Piece::new(PieceKind::Knight, PieceColor::White)),
    Some(Piece::new(PieceKind::Bishop, PieceColor::Black)),
    Some(Piece::new(PieceKind::Bishop, PieceColor::White)),
    Some(Piece::new(PieceKind::Rook, PieceColor::Black)),
    Some(Piece::new(PieceKind::Rook, PieceColor::White)),
    Some(Piece::new(PieceKind::Queen, PieceColor::Black)),
    Some(Piece::new(PieceKind::Queen, PieceColor::White)),
    Some(Piece::new(PieceKind::King, PieceColor::Black)),
    Some(Piece::new(PieceKind::King, PieceColor::White)),
];

impl PieceKind {
    /// Uppercase letter used in FEN and in piece marker identifiers.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    fn ordinal(self) -> u8 {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Decode an engine piece code. Returns `None` for 0 and for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        PIECE_CODES.get(code as usize).copied().flatten()
    }

    pub fn code(self) -> u8 {
        let base = self.kind.ordinal() * 2 + 1;
        match self.color {
            PieceColor::Black => base,
            PieceColor::White => base + 1,
        }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { kind, color })
    }

    pub fn fen_char(self) -> char {
        match self.color {
            PieceColor::White => self.kind.letter(),
            PieceColor::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Two-letter prefix of the marker identifier: colour then kind, e.g. `wP`.
    pub fn id_prefix(self) -> [char; 2] {
        let color = match self.color {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        };
        [color, self.kind.letter()]
    }

    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "assets/pawn-white.svg",
            (PieceKind::Pawn, PieceColor::Black) => "assets/pawn-black.svg",
            (PieceKind::Rook, PieceColor::White) => "assets/rook-white.svg",
            (PieceKind::Rook, PieceColor::Black) => "assets/rook-black.svg",
            (PieceKind::Knight, PieceColor::White) => "assets/knight-white.svg",
            (PieceKind::Knight, PieceColor::Black) => "assets/knight-black.svg",
            (PieceKind::Bishop, PieceColor::White) => "assets/bishop-white.svg",
            (PieceKind::Bishop, PieceColor::Black) => "assets/bishop-black.svg",
            (PieceKind::Queen, PieceColor::White) => "assets/queen-white.svg",
            (PieceKind::Queen, PieceColor::Black) => "assets/queen-black.svg",
            (PieceKind::King, PieceColor::White) => "assets/king-white.svg",
            (PieceKind::King, PieceColor::Black) => "assets/king-black.svg",
        }
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    };
    Piece { kind, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_table_is_a_bijection() {
        assert_eq!(Piece::from_code(0), None);
        let mut seen = HashSet::new();
        for code in 1..=12u8 {
            let piece = Piece::from_code(code).unwrap();
            assert!(seen.insert(piece), "code {code} repeats {piece:?}");
            assert_eq!(piece.code(), code);
        }
        assert_eq!(seen.len(), 12);
        assert_eq!(Piece::from_code(13), None);
    }

    #[test]
    fn test_code_parity_and_order() {
        for code in 1..=12u8 {
            let piece = Piece::from_code(code).unwrap();
            let expected = if code % 2 == 1 {
                PieceColor::Black
            } else {
                PieceColor::White
            };
            assert_eq!(piece.color, expected);
        }
        assert_eq!(Piece::from_code(2).unwrap().kind, PieceKind::Pawn);
        assert_eq!(Piece::from_code(4).unwrap().kind, PieceKind::Knight);
        assert_eq!(Piece::from_code(6).unwrap().kind, PieceKind::Bishop);
        assert_eq!(Piece::from_code(8).unwrap().kind, PieceKind::Rook);
        assert_eq!(Piece::from_code(10).unwrap().kind, PieceKind::Queen);
        assert_eq!(Piece::from_code(12).unwrap().kind, PieceKind::King);
    }

    #[test]
    fn test_fen_chars() {
        let white_knight = Piece::from_fen_char('N').unwrap();
        assert_eq!(white_knight, Piece::new(PieceKind::Knight, PieceColor::White));
        assert_eq!(white_knight.fen_char(), 'N');
        let black_queen = Piece::from_fen_char('q').unwrap();
        assert_eq!(black_queen.color, PieceColor::Black);
        assert_eq!(black_queen.fen_char(), 'q');
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn test_id_prefix() {
        let piece = Piece::new(PieceKind::Pawn, PieceColor::White);
        assert_eq!(piece.id_prefix(), ['w', 'P']);
        let piece = Piece::new(PieceKind::King, PieceColor::Black);
        assert_eq!(piece.id_prefix(), ['b', 'K']);
    }
}
