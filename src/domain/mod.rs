//! Pure board-coordinate and position-decoding types. No GPUI dependencies.

pub mod moves;
pub mod orientation;
pub mod piece;
pub mod position;
pub mod square;

pub use moves::{MoveRequest, PromotionChoice};
pub use orientation::Orientation;
pub use piece::{Piece, PieceColor, PieceKind, shakmaty_to_piece};
pub use position::{Placement, STANDARD_FEN, board_field, decode_fen, decode_position_array};
pub use square::{Square, SquareError, flip_label, square_label};
