//! Colors and sizes for the board window.

use gpui::{Rgba, rgb};

use crate::domain::Square;

pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const GHOST_OPACITY: f32 = 0.4;
pub const MIN_SQUARE_SIZE: f32 = 30.0;

pub const INITIAL_BOARD_PANEL: f32 = 560.0;
pub const INITIAL_SIDE_PANEL: f32 = 300.0;

pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const DROP_TARGET: u32 = 0x8FB573;

pub const PANEL_BG: u32 = 0x2a2a2a;
pub const CARD_BG: u32 = 0x1e1e1e;
pub const OVERLAY_BG: u32 = 0x000000aa;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ERROR: u32 = 0xf87171;
pub const CLOCK_ACTIVE: u32 = 0x4ade80;

/// Color of a square on the drawn grid. a1 is dark on every board, flipped or not.
pub fn square_color(visual: Square) -> Rgba {
    if (visual.rank() + visual.file()) % 2 == 0 {
        rgb(DARK_SQUARE)
    } else {
        rgb(LIGHT_SQUARE)
    }
}

/// Color for the label text drawn on a square, contrasting with it.
pub fn coordinate_color(visual: Square) -> Rgba {
    if (visual.rank() + visual.file()) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
