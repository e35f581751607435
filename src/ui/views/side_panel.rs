//! Side panel: game status and the new-game controls.

use gpui::{ClickEvent, Context, Div, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::config::StartPreset;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, CARD_BG, PANEL_BG, TEXT_ERROR, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::views::board_view::{BoardSnapshot, ChessBoardView};

impl ChessBoardView {
    pub(super) fn render_side_panel(
        &self,
        snapshot: &BoardSnapshot,
        cx: &mut Context<Self>,
    ) -> Div {
        let status = snapshot
            .game_over
            .clone()
            .unwrap_or_else(|| snapshot.clock.label());

        let white_button = Button::new("toggle-white")
            .label(format!("White: {}", self.draft.white.label()))
            .compact()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.draft.white = this.draft.white.toggled();
                cx.notify();
            }));
        let black_button = Button::new("toggle-black")
            .label(format!("Black: {}", self.draft.black.label()))
            .compact()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.draft.black = this.draft.black.toggled();
                cx.notify();
            }));

        let custom_fen = self.draft.fen.is_some();
        let presets = StartPreset::ALL.into_iter().map(|preset| {
            let id = SharedString::from(format!("preset-{}", preset.label()));
            let button = Button::new(id).label(preset.label()).compact();
            let button = if !custom_fen && self.draft.start == preset {
                button.primary()
            } else {
                button
            };
            button.on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                this.draft.start = preset;
                this.draft.fen = None;
                cx.notify();
            }))
        });

        let new_game = Button::new("new-game")
            .label("New game")
            .primary()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.new_game(cx)));

        let card = div()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(rgb(CARD_BG))
            .border_1()
            .border_color(rgb(BORDER_COLOR))
            .rounded_md()
            .child(
                div()
                    .text_color(rgb(TEXT_PRIMARY))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(status),
            )
            .when_some(snapshot.last_error.clone(), |el, err| {
                el.child(div().text_xs().text_color(rgb(TEXT_ERROR)).child(err))
            })
            .child(
                div()
                    .pt_2()
                    .border_t_1()
                    .border_color(rgb(BORDER_COLOR))
                    .text_xs()
                    .text_color(rgb(TEXT_SECONDARY))
                    .child("Players"),
            )
            .child(div().flex().gap_2().child(white_button).child(black_button))
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(TEXT_SECONDARY))
                    .child(if custom_fen {
                        "Start (custom FEN)"
                    } else {
                        "Start"
                    }),
            )
            .child(div().flex().flex_wrap().gap_2().children(presets))
            .child(div().pt_2().child(new_game));

        div()
            .size_full()
            .flex()
            .flex_col()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(card)
    }
}
