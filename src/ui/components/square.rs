//! Square rendering component.

use gpui::{div, img, prelude::*, px, rgb};

use crate::domain::{Piece, Square};
use crate::ui::components::render_piece;
use crate::ui::theme::{DROP_TARGET, GHOST_OPACITY, coordinate_color, square_color};

#[derive(Clone, Copy, Debug, Default)]
pub struct SquareStyle {
    /// The piece here is being dragged; draw it faded
    pub ghost: bool,
    pub drop_target: bool,
    /// Logical file letter, drawn on the bottom row
    pub file_label: Option<char>,
    /// Logical rank digit, drawn on the left column
    pub rank_label: Option<char>,
}

/// Render one square of the drawn grid. `visual` picks the color, labels come
/// from the logical square.
pub fn render_square(
    visual: Square,
    piece: Option<Piece>,
    style: SquareStyle,
    square_size: f32,
    piece_size: f32,
) -> impl IntoElement {
    let label_color = coordinate_color(visual);
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .relative()
        .size(px(square_size))
        .bg(if style.drop_target {
            rgb(DROP_TARGET)
        } else {
            square_color(visual)
        })
        .flex()
        .items_center()
        .justify_center()
        .when_some(style.rank_label, |el, rank| {
            el.child(
                div()
                    .absolute()
                    .top_0()
                    .left(px(2.0))
                    .text_xs()
                    .text_color(label_color)
                    .child(rank.to_string()),
            )
        })
        .when_some(style.file_label, |el, file| {
            el.child(
                div()
                    .absolute()
                    .bottom_0()
                    .right(px(2.0))
                    .text_xs()
                    .text_color(label_color)
                    .child(file.to_string()),
            )
        })
        .when_some(piece, |el, p| {
            if style.ghost {
                el.child(
                    div()
                        .size_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .opacity(GHOST_OPACITY)
                        .child(img(p.svg_path()).size(px(piece_size))),
                )
            } else {
                el.child(render_piece(p, piece_size))
            }
        })
}
