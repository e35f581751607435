//! Drag-and-drop gesture handling.
//!
//! The host reports element identifiers for drag start, drag over and drop.
//! `MoveInput` turns a completed gesture into a logical move, or into a
//! pending promotion when a pawn lands on its last rank.

use crate::domain::{MoveRequest, Orientation, Piece, PieceColor, PieceKind, Square};
use crate::models::board::{is_marker_id, parse_marker_id};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    /// A piece marker has been picked up
    Dragging { piece_id: String },
    /// The dragged piece has passed over a drop target
    AwaitingDrop { piece_id: String, over: String },
}

/// Result of a drop, in logical board coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropResolution {
    /// Nothing to do: no drag in progress, piece dropped on itself, or
    /// unreadable identifiers.
    Ignored,
    Direct(MoveRequest),
    Promotion { from: Square, to: Square },
}

#[derive(Clone, Debug, Default)]
pub struct MoveInput {
    state: InputState,
}

impl MoveInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Identifier of the piece currently being dragged.
    pub fn dragged(&self) -> Option<&str> {
        match &self.state {
            InputState::Idle => None,
            InputState::Dragging { piece_id } | InputState::AwaitingDrop { piece_id, .. } => {
                Some(piece_id.as_str())
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = InputState::Idle;
    }

    /// Pick up the piece marker `piece_id`. Returns false if the identifier
    /// is not a piece marker.
    pub fn drag_start(&mut self, piece_id: &str) -> bool {
        if parse_marker_id(piece_id).is_none() {
            tracing::warn!("[INPUT] Drag started on non-piece element {:?}", piece_id);
            self.state = InputState::Idle;
            return false;
        }
        tracing::debug!("[INPUT] Drag start {}", piece_id);
        self.state = InputState::Dragging {
            piece_id: piece_id.to_string(),
        };
        true
    }

    /// The dragged piece is over `target_id`. Returns whether a drop there is
    /// accepted; no board state changes.
    pub fn drag_over(&mut self, target_id: &str) -> bool {
        let Some(piece_id) = self.dragged().map(str::to_string) else {
            return false;
        };
        self.state = InputState::AwaitingDrop {
            piece_id,
            over: target_id.to_string(),
        };
        true
    }

    /// Finish the gesture on `target_id`. Always returns to `Idle`.
    pub fn drop_on(&mut self, target_id: &str, orientation: Orientation) -> DropResolution {
        let Some(piece_id) = self.dragged().map(str::to_string) else {
            tracing::debug!("[INPUT] Drop on {} without a drag", target_id);
            return DropResolution::Ignored;
        };
        self.state = InputState::Idle;

        let Some((piece, visual_from)) = parse_marker_id(&piece_id) else {
            return DropResolution::Ignored;
        };

        let visual_to = if is_marker_id(target_id) {
            if target_id == piece_id {
                tracing::debug!("[INPUT] {} dropped on itself", piece_id);
                return DropResolution::Ignored;
            }
            match parse_marker_id(target_id) {
                Some((_, square)) => square,
                None => {
                    tracing::warn!("[INPUT] Unreadable capture target {:?}", target_id);
                    return DropResolution::Ignored;
                }
            }
        } else {
            match Square::from_label(target_id) {
                Ok(square) => square,
                Err(err) => {
                    tracing::warn!("[INPUT] Unreadable drop target: {}", err);
                    return DropResolution::Ignored;
                }
            }
        };

        let from = orientation.apply(visual_from);
        let to = orientation.apply(visual_to);

        if is_promotion(piece, to) {
            tracing::info!("[INPUT] Promotion pending {}{}", from, to);
            DropResolution::Promotion { from, to }
        } else {
            DropResolution::Direct(MoveRequest::new(from, to))
        }
    }
}

/// A white pawn reaching rank 8 or a black pawn reaching rank 1.
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    match (piece.kind, piece.color) {
        (PieceKind::Pawn, PieceColor::White) => to.rank() == 8,
        (PieceKind::Pawn, PieceColor::Black) => to.rank() == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        Square::from_label(label).unwrap()
    }

    fn flipped() -> Orientation {
        let mut orientation = Orientation::default();
        orientation.recompute(false, false);
        orientation
    }

    #[test]
    fn test_state_transitions() {
        let mut input = MoveInput::new();
        assert_eq!(input.state(), &InputState::Idle);
        assert!(!input.drag_over("e4"));

        assert!(input.drag_start("wP@e2"));
        assert!(matches!(input.state(), InputState::Dragging { .. }));

        assert!(input.drag_over("e4"));
        assert_eq!(
            input.state(),
            &InputState::AwaitingDrop {
                piece_id: "wP@e2".to_string(),
                over: "e4".to_string()
            }
        );

        let resolution = input.drop_on("e4", Orientation::default());
        assert_eq!(
            resolution,
            DropResolution::Direct(MoveRequest::new(sq("e2"), sq("e4")))
        );
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn test_drag_start_rejects_squares() {
        let mut input = MoveInput::new();
        assert!(!input.drag_start("e2"));
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let mut input = MoveInput::new();
        assert_eq!(
            input.drop_on("e4", Orientation::default()),
            DropResolution::Ignored
        );
    }

    #[test]
    fn test_capture_target() {
        let mut input = MoveInput::new();
        input.drag_start("wN@f3");
        let resolution = input.drop_on("bP@e5", Orientation::default());
        assert_eq!(
            resolution,
            DropResolution::Direct(MoveRequest::new(sq("f3"), sq("e5")))
        );
    }

    #[test]
    fn test_drop_on_itself_is_noop() {
        let mut input = MoveInput::new();
        input.drag_start("wN@f3");
        input.drag_over("wN@f3");
        assert_eq!(
            input.drop_on("wN@f3", Orientation::default()),
            DropResolution::Ignored
        );
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn test_unreadable_target() {
        let mut input = MoveInput::new();
        input.drag_start("wN@f3");
        assert_eq!(
            input.drop_on("board", Orientation::default()),
            DropResolution::Ignored
        );
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn test_flipped_gesture_is_mapped_back() {
        // logical e7 is drawn at visual d2 when black is at the bottom
        let mut input = MoveInput::new();
        input.drag_start("bP@d2");
        let resolution = input.drop_on("d4", flipped());
        assert_eq!(
            resolution,
            DropResolution::Direct(MoveRequest::new(sq("e7"), sq("e5")))
        );
    }

    #[test]
    fn test_promotion_detection() {
        let mut input = MoveInput::new();
        input.drag_start("wP@a7");
        assert_eq!(
            input.drop_on("a8", Orientation::default()),
            DropResolution::Promotion {
                from: sq("a7"),
                to: sq("a8")
            }
        );

        input.drag_start("wP@a6");
        assert_eq!(
            input.drop_on("a7", Orientation::default()),
            DropResolution::Direct(MoveRequest::new(sq("a6"), sq("a7")))
        );

        // black pawn on logical b2 is drawn at visual g7 when flipped
        input.drag_start("bP@g7");
        assert_eq!(
            input.drop_on("wR@h8", flipped()),
            DropResolution::Promotion {
                from: sq("b2"),
                to: sq("a1")
            }
        );

        input.drag_start("wR@a7");
        assert_eq!(
            input.drop_on("a8", Orientation::default()),
            DropResolution::Direct(MoveRequest::new(sq("a7"), sq("a8")))
        );
    }
}
