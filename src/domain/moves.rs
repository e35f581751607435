//! Resolved move requests handed to the rules engine.

use crate::domain::{PieceKind, Square};

/// Promotion piece, numbered the way the engine expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionChoice {
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    /// Map a chooser label (`"queen"`, `"Q"`, `"n"`, ...) to a choice.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "queen" | "q" => Some(PromotionChoice::Queen),
            "rook" | "r" => Some(PromotionChoice::Rook),
            "bishop" | "b" => Some(PromotionChoice::Bishop),
            "knight" | "n" => Some(PromotionChoice::Knight),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromotionChoice::Queen => "queen",
            PromotionChoice::Rook => "rook",
            PromotionChoice::Bishop => "bishop",
            PromotionChoice::Knight => "knight",
        }
    }
}

/// A fully resolved move in logical board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionChoice>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, choice: PromotionChoice) -> Self {
        self.promotion = Some(choice);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_codes() {
        let codes: Vec<u8> = PromotionChoice::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_promotion_labels() {
        assert_eq!(PromotionChoice::from_label("Queen"), Some(PromotionChoice::Queen));
        assert_eq!(PromotionChoice::from_label("n"), Some(PromotionChoice::Knight));
        assert_eq!(PromotionChoice::from_label(" rook "), Some(PromotionChoice::Rook));
        assert_eq!(PromotionChoice::from_label("king"), None);
        for choice in PromotionChoice::ALL {
            assert_eq!(PromotionChoice::from_label(choice.label()), Some(choice));
        }
    }
}
