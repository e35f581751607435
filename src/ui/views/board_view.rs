//! Chess board view - the drawn grid with drag-and-drop, the promotion
//! chooser and the game-over popup.

use gpui::{
    Bounds, ClickEvent, Context, Div, Entity, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, Pixels, Point, SharedString, Subscription, Window, canvas, div, img,
    prelude::*, px, rgb, rgba,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::config::GameSetup;
use crate::domain::{Piece, PieceColor, PromotionChoice, Square};
use crate::models::GameModel;
use crate::models::board::{is_marker_id, parse_marker_id};
use crate::models::notifier::ClockIndicator;
use crate::ui::BoardLayout;
use crate::ui::components::{SquareStyle, render_floating_piece, render_square};
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, CARD_BG, CLOCK_ACTIVE, INITIAL_BOARD_PANEL, INITIAL_SIDE_PANEL,
    OVERLAY_BG, PANEL_BG, TEXT_PRIMARY,
};

/// The main window view, observing a GameModel
pub struct ChessBoardView {
    pub(super) model: Entity<GameModel>,
    layout: BoardLayout,
    panel_origin: Point<Pixels>,
    /// Pointer position relative to the board panel while a drag is in progress
    pointer: Option<(f32, f32)>,
    /// Setup used by the next "New game"
    pub(super) draft: GameSetup,
    _subscription: Subscription,
}

/// What the board needs from the model for one frame.
pub(super) struct BoardSnapshot {
    cells: Vec<(Square, Option<Piece>, SquareStyle)>,
    floating: Option<Piece>,
    pub(super) clock: ClockIndicator,
    promotion_color: Option<PieceColor>,
    pub(super) game_over: Option<String>,
    pub(super) game_over_visible: bool,
    pub(super) last_error: Option<String>,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let draft = model.read(cx).setup().clone();
        Self {
            model,
            layout: BoardLayout::default(),
            panel_origin: Point::default(),
            pointer: None,
            draft,
            _subscription,
        }
    }

    fn local_position(&self, position: Point<Pixels>) -> (f32, f32) {
        let local = position - self.panel_origin;
        (local.x.into(), local.y.into())
    }

    fn snapshot(&self, cx: &Context<Self>) -> BoardSnapshot {
        let game = self.model.read(cx);
        let orientation = game.orientation();
        let dragged = game.input().dragged().and_then(parse_marker_id);
        let drop_target = dragged
            .and(self.pointer)
            .and_then(|(x, y)| self.layout.square_at(x, y));

        let cells = (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .filter_map(|(row, col)| Square::from_row_col(row, col).map(|sq| (row, col, sq)))
            .map(|(row, col, visual)| {
                let logical = orientation.apply(visual);
                let style = SquareStyle {
                    ghost: dragged.is_some_and(|(_, from)| from == visual),
                    drop_target: drop_target == Some(visual),
                    file_label: (row == 7).then(|| logical.file_char()),
                    rank_label: (col == 0).then(|| logical.rank_char()),
                };
                (visual, game.board().piece_at(visual), style)
            })
            .collect();

        let clock = *game.clock();
        BoardSnapshot {
            cells,
            floating: dragged.map(|(piece, _)| piece),
            clock,
            promotion_color: game
                .promotion()
                .chooser_visible()
                .then_some(clock.to_move),
            game_over: game.game_over().outcome().map(|outcome| outcome.message()),
            game_over_visible: game.game_over().is_visible(),
            last_error: game.last_error().map(str::to_string),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>) {
        let (x, y) = self.local_position(ev.position);
        let Some(square) = self.layout.square_at(x, y) else {
            return;
        };
        let started = self.model.update(cx, |game, cx| {
            let piece_id = game.board().element_id(square);
            if !is_marker_id(&piece_id) || !game.drag_start(&piece_id) {
                return false;
            }
            cx.notify();
            true
        });
        if started {
            self.pointer = Some((x, y));
            cx.notify();
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, _: &mut Window, cx: &mut Context<Self>) {
        if self.pointer.is_none() {
            return;
        }
        let (x, y) = self.local_position(ev.position);
        self.pointer = Some((x, y));
        if let Some(square) = self.layout.square_at(x, y) {
            self.model.update(cx, |game, _| {
                let target_id = game.board().element_id(square);
                game.drag_over(&target_id);
            });
        }
        cx.notify();
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, _: &mut Window, cx: &mut Context<Self>) {
        if self.pointer.take().is_none() {
            return;
        }
        let (x, y) = self.local_position(ev.position);
        let target = self.layout.square_at(x, y);
        self.model.update(cx, |game, cx| {
            match target {
                Some(square) => {
                    let target_id = game.board().element_id(square);
                    game.drop_on(&target_id);
                }
                None => game.cancel_drag(),
            }
            game.drive_turn_loop(cx);
            cx.notify();
        });
        cx.notify();
    }

    /// Released outside the board panel: the drag is abandoned.
    fn on_mouse_up_out(&mut self, _: &MouseUpEvent, _: &mut Window, cx: &mut Context<Self>) {
        if self.pointer.take().is_none() {
            return;
        }
        self.model.update(cx, |game, cx| {
            game.cancel_drag();
            cx.notify();
        });
        cx.notify();
    }

    fn select_promotion(&mut self, choice: PromotionChoice, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| {
            game.select_promotion(choice.label());
            game.drive_turn_loop(cx);
            cx.notify();
        });
    }

    pub(super) fn new_game(&mut self, cx: &mut Context<Self>) {
        let setup = self.draft.clone();
        self.pointer = None;
        self.model.update(cx, |game, cx| {
            // a failed load is kept on the model and shown in the side panel
            let _ = game.reset(setup);
            game.drive_turn_loop(cx);
            cx.notify();
        });
    }

    fn render_board(&self, snapshot: &BoardSnapshot) -> Div {
        let square_size = self.layout.square_size();
        let piece_size = self.layout.piece_size();
        let board_size = self.layout.board_size();

        let rows = snapshot.cells.chunks(8).map(|row| {
            div()
                .flex()
                .flex_shrink_0()
                .children(row.iter().map(|&(visual, piece, style)| {
                    render_square(visual, piece, style, square_size, piece_size)
                }))
        });

        div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_size))
            .h(px(board_size))
            .overflow_hidden()
            .rounded_md()
            .children(rows)
    }

    /// Side-to-move chip beside the board edge of the player whose turn it is.
    fn render_clock(&self, clock: ClockIndicator) -> Div {
        let top = if clock.at_bottom {
            BOARD_PADDING + self.layout.board_size() + 2.0
        } else {
            2.0
        };
        div()
            .absolute()
            .left(px(BOARD_PADDING))
            .top(px(top))
            .flex()
            .items_center()
            .gap_1()
            .text_xs()
            .text_color(rgb(TEXT_PRIMARY))
            .child(div().size(px(8.0)).rounded_full().bg(rgb(CLOCK_ACTIVE)))
            .child(clock.label())
    }

    fn render_promotion_chooser(&self, color: PieceColor, cx: &mut Context<Self>) -> Div {
        let piece_size = self.layout.piece_size();
        let choices = PromotionChoice::ALL.into_iter().map(|choice| {
            let piece = Piece::new(choice.kind(), color);
            div()
                .id(SharedString::from(format!("promote-{}", choice.label())))
                .size(px(piece_size))
                .rounded_md()
                .cursor_pointer()
                .hover(|s| s.bg(rgb(BORDER_COLOR)))
                .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                    this.select_promotion(choice, cx);
                }))
                .child(img(piece.svg_path()).size(px(piece_size)))
        });

        let cancel = Button::new("cancel-promotion")
            .label("Cancel")
            .compact()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.model.update(cx, |game, cx| {
                    game.cancel_promotion();
                    cx.notify();
                });
            }));

        render_overlay(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .child("Promote to")
                .child(div().flex().gap_2().children(choices))
                .child(cancel),
        )
    }

    fn render_game_over(&self, message: String, cx: &mut Context<Self>) -> Div {
        let ok = Button::new("game-over-ok")
            .label("OK")
            .primary()
            .compact()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.model.update(cx, |game, cx| {
                    game.acknowledge_game_over();
                    cx.notify();
                });
            }));

        render_overlay(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_3()
                .child(
                    div()
                        .text_xl()
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(message),
                )
                .child(ok),
        )
    }
}

/// Dim the board and show `content` in a centered card.
fn render_overlay(content: impl IntoElement) -> Div {
    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgba(OVERLAY_BG))
        .child(
            div()
                .p_4()
                .rounded_md()
                .bg(rgb(CARD_BG))
                .border_1()
                .border_color(rgb(BORDER_COLOR))
                .text_color(rgb(TEXT_PRIMARY))
                .child(content),
        )
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let snapshot = self.snapshot(cx);
        let piece_size = self.layout.piece_size();

        let floating_piece = snapshot
            .floating
            .zip(self.pointer)
            .map(|(piece, (x, y))| render_floating_piece(piece, x, y, piece_size));
        let promotion_chooser = snapshot
            .promotion_color
            .map(|color| self.render_promotion_chooser(color, cx));
        let game_over_popup = snapshot
            .game_over
            .clone()
            .filter(|_| snapshot.game_over_visible)
            .map(|message| self.render_game_over(message, cx));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(self.render_board(&snapshot))
            .child(self.render_clock(snapshot.clock))
            .when_some(floating_piece, |el, fp| el.child(fp))
            .when_some(promotion_chooser, |el, chooser| el.child(chooser))
            .when_some(game_over_popup, |el, popup| el.child(popup))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_mouse_up_out));

        // Canvas to measure actual panel bounds
        let view = cx.entity();
        let measure_canvas = canvas(
            move |bounds: Bounds<Pixels>, _window, cx| {
                view.update(cx, |this, cx| {
                    if this.layout.panel_size != bounds.size || this.panel_origin != bounds.origin
                    {
                        this.layout = BoardLayout::new(bounds.size);
                        this.panel_origin = bounds.origin;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let side_panel = self.render_side_panel(&snapshot, cx);

        div().size_full().font_family("Berkeley Mono").child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_BOARD_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_SIDE_PANEL))
                        .size_range(px(200.)..Pixels::MAX)
                        .child(side_panel),
                ),
        )
    }
}
