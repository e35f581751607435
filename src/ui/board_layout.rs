//! Board layout calculations: sizing and pointer-to-square mapping.

use gpui::{Pixels, Size, px};

use crate::domain::Square;
use crate::ui::theme::{BOARD_PADDING, MIN_SQUARE_SIZE, PIECE_SCALE};

/// Layout of the drawn grid inside the measured board panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available = (panel_width - BOARD_PADDING * 2.0).min(panel_height - BOARD_PADDING * 2.0);
        (available / 8.0).max(MIN_SQUARE_SIZE)
    }

    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    pub fn board_size(&self) -> f32 {
        self.square_size() * 8.0
    }

    /// Visual square under a point given relative to the board panel.
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;
        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }
        let square_size = self.square_size();
        Square::from_row_col((board_y / square_size) as usize, (board_x / square_size) as usize)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(560.0),
            height: px(600.0),
        })
    }
}
