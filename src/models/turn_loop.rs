//! Deferred turn steps.
//!
//! Every repaint schedules one step. The host runs it later, off the current
//! input handler, so a chain of computer moves never recurses and a reset can
//! drop steps that belong to the previous game.

use crate::domain::MoveRequest;
use crate::models::engine::RulesEngine;
use crate::models::game::GameModel;
use crate::models::notifier::GameOutcome;

/// Permission to run one turn step, tied to the game it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnTicket {
    generation: u64,
}

impl TurnTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStep {
    /// Issued before the last reset; nothing was done
    Stale,
    GameOver(GameOutcome),
    /// The computer played and another step is scheduled
    ComputerMoved(MoveRequest),
    /// The engine had no move to offer for the computer side
    ComputerStuck,
    AwaitingHuman,
}

impl<E: RulesEngine> GameModel<E> {
    /// Run one scheduled step: stop on a finished game, otherwise let the
    /// computer move if it is its turn.
    pub fn run_turn_step(&mut self, ticket: TurnTicket) -> TurnStep {
        if ticket.generation != self.generation() {
            tracing::debug!("[TURN] Dropping step from an earlier game");
            return TurnStep::Stale;
        }

        if let Some(outcome) = self.terminal_outcome() {
            self.game_over_mut().signal(outcome);
            return TurnStep::GameOver(outcome);
        }

        if !self.engine().is_computer_to_move() {
            return TurnStep::AwaitingHuman;
        }

        match self.engine_mut().apply_computer_move() {
            Some(request) => {
                tracing::info!("[TURN] Computer played {}{}", request.from, request.to);
                self.repaint_from_engine();
                TurnStep::ComputerMoved(request)
            }
            None => {
                tracing::warn!("[TURN] Engine returned no computer move");
                TurnStep::ComputerStuck
            }
        }
    }
}
