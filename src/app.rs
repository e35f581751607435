//! Application setup and window creation.

use std::time::Duration;

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::config::Settings;
use crate::models::GameModel;
use crate::ui::views::ChessBoardView;

/// Open the board window and start the first game
pub fn run(cx: &mut App, settings: Settings) -> anyhow::Result<()> {
    gpui_component::init(cx);

    let model = cx.new(|_| {
        let mut game = GameModel::new();
        game.set_computer_delay(Duration::from_millis(settings.computer_delay_ms));
        // a bad starting FEN leaves the standard position up with the error shown
        let _ = game.reset(settings.setup.clone());
        game
    });
    model.update(cx, |game, cx| game.drive_turn_loop(cx));

    let bounds = Bounds::centered(None, size(px(900.0), px(620.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
