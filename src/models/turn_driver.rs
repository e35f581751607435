//! Runs scheduled turn steps on the GPUI executor.

use std::time::Duration;

use gpui::{AsyncApp, Context, WeakEntity};

use crate::models::engine::RulesEngine;
use crate::models::game::GameModel;
use crate::models::turn_loop::TurnStep;

impl<E: RulesEngine + 'static> GameModel<E> {
    /// Spawn the pending turn step, if any. Computer moves wait for the
    /// configured delay so they can be followed on screen.
    pub fn drive_turn_loop(&mut self, cx: &mut Context<Self>) {
        let Some(ticket) = self.take_scheduled_step() else {
            return;
        };
        let delay = if self.engine().is_computer_to_move() {
            self.computer_delay
        } else {
            Duration::ZERO
        };

        cx.spawn(async move |weak_entity: WeakEntity<GameModel<E>>, cx: &mut AsyncApp| {
            cx.background_executor().timer(delay).await;
            // the entity is gone once the window closes
            let _ = weak_entity.update(cx, |game, cx| {
                if game.run_turn_step(ticket) == TurnStep::Stale {
                    return;
                }
                game.drive_turn_loop(cx);
                cx.notify();
            });
        })
        .detach();
    }
}
