mod board_view;
mod side_panel;

pub use board_view::ChessBoardView;
