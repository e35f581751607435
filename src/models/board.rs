//! The rendered board: what is drawn on each cell of the visual grid.
//!
//! Cells are keyed by *visual* square, so when the orientation is flipped the
//! cell labelled `a8` holds whatever stands on logical h1. Piece markers carry
//! identifiers of the form `wP@e2` (colour, kind, `@`, visual square); empty
//! cells are identified by their bare label.

use crate::domain::{Piece, PieceColor, PieceKind, Placement, Square};

/// Length of a piece marker identifier.
pub const MARKER_ID_LEN: usize = 5;

/// Identifier of the marker drawn for `piece` on visual square `square`.
pub fn marker_id(piece: Piece, square: Square) -> String {
    let [color, kind] = piece.id_prefix();
    format!("{color}{kind}@{square}")
}

/// Whether `id` has the shape of a piece marker identifier: five
/// characters, the first two alphabetic.
pub fn is_marker_id(id: &str) -> bool {
    id.len() == MARKER_ID_LEN && id.chars().take(2).all(|c| c.is_ascii_alphabetic())
}

/// Split a marker identifier into its piece and visual square.
pub fn parse_marker_id(id: &str) -> Option<(Piece, Square)> {
    if !is_marker_id(id) || !id.is_char_boundary(3) {
        return None;
    }
    let mut chars = id.chars();
    let color = match chars.next()? {
        'w' => PieceColor::White,
        'b' => PieceColor::Black,
        _ => return None,
    };
    let kind = PieceKind::from_letter(chars.next()?)?;
    if chars.next()? != '@' {
        return None;
    }
    let square = Square::from_label(&id[3..]).ok()?;
    Some((Piece::new(kind, color), square))
}

/// The visual grid. Repaints swap in a whole new grid at once.
#[derive(Clone, Debug)]
pub struct RenderedBoard {
    cells: [Option<Piece>; 64],
    /// Number of full repaints since creation
    frame: u64,
}

impl RenderedBoard {
    pub fn new() -> Self {
        Self {
            cells: [None; 64],
            frame: 0,
        }
    }

    /// Replace the whole board with `placements`. The new grid is built off
    /// to the side, so no caller ever observes a half-cleared board.
    pub fn repaint(&mut self, placements: &[Placement]) {
        let mut cells = [None; 64];
        for placement in placements {
            cells[placement.square.index()] = Some(placement.piece);
        }
        self.cells = cells;
        self.frame += 1;
        tracing::debug!(
            "[RENDER] Frame {} with {} pieces",
            self.frame,
            placements.len()
        );
    }

    /// Remove the piece on visual square `label`. Unknown labels are reported
    /// and ignored.
    pub fn clear_square(&mut self, label: &str) -> bool {
        match Square::from_label(label) {
            Ok(square) => {
                self.cells[square.index()] = None;
                true
            }
            Err(err) => {
                tracing::warn!("[RENDER] Cannot clear square: {}", err);
                false
            }
        }
    }

    /// Draw `piece` on visual square `label`. Unknown labels are reported and ignored.
    pub fn place_piece(&mut self, label: &str, piece: Piece) -> bool {
        match Square::from_label(label) {
            Ok(square) => {
                self.cells[square.index()] = Some(piece);
                true
            }
            Err(err) => {
                tracing::warn!("[RENDER] Cannot place piece: {}", err);
                false
            }
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Piece drawn at row/col of the visual grid (row 0 at the top).
    pub fn piece_at_row_col(&self, row: usize, col: usize) -> Option<Piece> {
        Square::from_row_col(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Identifier of the element on visual square `square`: the piece marker
    /// if occupied, else the square label.
    pub fn element_id(&self, square: Square) -> String {
        match self.piece_at(square) {
            Some(piece) => marker_id(piece, square),
            None => square.label(),
        }
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for RenderedBoard {
    fn default() -> Self {
        Self::new()
    }
}
