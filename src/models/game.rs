//! Game state model - the application layer tying the board view to the engine.
//!
//! All mutable view state lives here, in one struct owned by the host:
//! orientation, the rendered grid, the drag state machine, the pending
//! promotion, and the game-over and clock displays.

use std::time::Duration;

use crate::config::{DEFAULT_COMPUTER_DELAY_MS, GameSetup};
use crate::domain::{
    MoveRequest, Orientation, PieceColor, board_field, decode_fen, decode_position_array,
};
use crate::models::board::RenderedBoard;
use crate::models::engine::{EngineError, RulesEngine, ShakmatyEngine};
use crate::models::input::{DropResolution, MoveInput};
use crate::models::notifier::{ClockIndicator, GameOutcome, GameOverNotifier};
use crate::models::promotion::PromotionFlow;
use crate::models::turn_loop::TurnTicket;

/// What became of a gesture or promotion selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was submitted (no-op gesture, refused drag, unknown label)
    Ignored,
    /// The engine refused the move; the board is untouched
    Illegal,
    /// Waiting for the player to choose a promotion piece
    PromotionPending,
    Applied,
    /// The move ended the game
    GameOver(GameOutcome),
}

/// The main game model containing all board view state
pub struct GameModel<E: RulesEngine = ShakmatyEngine> {
    engine: E,
    setup: GameSetup,
    orientation: Orientation,
    board: RenderedBoard,
    input: MoveInput,
    promotion: PromotionFlow,
    game_over: GameOverNotifier,
    clock: ClockIndicator,
    /// Bumped on every reset; turn tickets from older generations are stale
    generation: u64,
    scheduled: Option<TurnTicket>,
    pub(crate) computer_delay: Duration,
    last_error: Option<String>,
}

impl GameModel<ShakmatyEngine> {
    pub fn new() -> Self {
        Self::with_engine(ShakmatyEngine::new())
    }
}

impl Default for GameModel<ShakmatyEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RulesEngine> GameModel<E> {
    pub fn with_engine(engine: E) -> Self {
        let mut model = Self {
            engine,
            setup: GameSetup::default(),
            orientation: Orientation::default(),
            board: RenderedBoard::new(),
            input: MoveInput::new(),
            promotion: PromotionFlow::default(),
            game_over: GameOverNotifier::default(),
            clock: ClockIndicator::default(),
            generation: 0,
            scheduled: None,
            computer_delay: Duration::from_millis(DEFAULT_COMPUTER_DELAY_MS),
            last_error: None,
        };
        model.repaint_from_engine();
        model
    }

    pub fn set_computer_delay(&mut self, delay: Duration) {
        self.computer_delay = delay;
    }

    /// Start a fresh game. Anything pending from the previous game (promotion,
    /// drag, scheduled computer move) is dropped.
    pub fn reset(&mut self, setup: GameSetup) -> Result<(), EngineError> {
        self.discard_game_state();
        self.last_error = None;

        let white_is_computer = setup.white.is_computer();
        let black_is_computer = setup.black.is_computer();
        self.orientation.reset();
        self.engine.reset();
        self.engine.configure_players(white_is_computer, black_is_computer);
        self.orientation.seat_players(white_is_computer, black_is_computer);
        tracing::info!(
            "[GAME] Reset: white {}, black {}",
            setup.white.label(),
            setup.black.label()
        );

        let result = match setup.start_fen().map(str::to_string) {
            Some(fen) => self.load_fen(&fen),
            None => {
                self.repaint_from_engine();
                Ok(())
            }
        };
        if let Err(err) = &result {
            tracing::error!("[GAME] {}", err);
            self.last_error = Some(err.to_string());
            self.repaint_from_engine();
        }
        self.setup = setup;
        result
    }

    /// Hand a full FEN string to the engine and draw its placement field.
    /// The position starts a new game; on error the current one is untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), EngineError> {
        self.engine.load_position(fen)?;
        self.discard_game_state();
        self.recompute_orientation();
        let placements = decode_fen(board_field(fen), self.orientation);
        self.board.repaint(&placements);
        self.after_repaint();
        Ok(())
    }

    /// Drop everything tied to the previous position: pending promotion,
    /// drag, game-over popup and scheduled turn steps.
    fn discard_game_state(&mut self) {
        self.generation += 1;
        self.scheduled = None;
        self.promotion.cancel();
        self.input.reset();
        self.game_over.clear();
    }

    /// Fetch the engine's position and redraw the whole board.
    pub fn repaint_from_engine(&mut self) {
        self.recompute_orientation();
        let placements = decode_position_array(&self.engine.current_position(), self.orientation);
        self.board.repaint(&placements);
        self.after_repaint();
    }

    fn recompute_orientation(&mut self) {
        self.orientation.recompute(
            self.engine.is_computer_to_move(),
            self.engine.is_white_to_move(),
        );
    }

    fn after_repaint(&mut self) {
        self.clock.update(
            self.engine.is_white_to_move(),
            self.engine.is_computer_to_move(),
            self.orientation.is_flipped(),
        );
        self.scheduled = Some(TurnTicket::new(self.generation));
    }

    /// Checkmate or draw in the engine's current position.
    pub fn terminal_outcome(&self) -> Option<GameOutcome> {
        if self.engine.is_checkmate() {
            let loser = if self.engine.is_white_to_move() {
                PieceColor::White
            } else {
                PieceColor::Black
            };
            Some(GameOutcome::Checkmate {
                winner: loser.opposite(),
            })
        } else if self.engine.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Whether a new drag may begin: a human is to move, no promotion is
    /// pending and the game is not over.
    pub fn accepts_gestures(&self) -> bool {
        !self.promotion.is_pending()
            && self.game_over.outcome().is_none()
            && !self.engine.is_computer_to_move()
    }

    pub fn drag_start(&mut self, piece_id: &str) -> bool {
        if !self.accepts_gestures() {
            tracing::debug!("[INPUT] Drag of {} refused", piece_id);
            return false;
        }
        self.input.drag_start(piece_id)
    }

    pub fn drag_over(&mut self, target_id: &str) -> bool {
        self.input.drag_over(target_id)
    }

    /// Abandon the drag in progress, e.g. when released off the board.
    pub fn cancel_drag(&mut self) {
        self.input.reset();
    }

    pub fn drop_on(&mut self, target_id: &str) -> SubmitOutcome {
        match self.input.drop_on(target_id, self.orientation) {
            DropResolution::Ignored => SubmitOutcome::Ignored,
            DropResolution::Direct(request) => self.submit(request),
            DropResolution::Promotion { from, to } => {
                if !self.engine.is_legal_move(from, to) {
                    tracing::debug!("[INPUT] Illegal promotion {}{}", from, to);
                    return SubmitOutcome::Illegal;
                }
                if self.promotion.begin(from, to) {
                    SubmitOutcome::PromotionPending
                } else {
                    SubmitOutcome::Ignored
                }
            }
        }
    }

    /// Finish a pending promotion with the chooser's label.
    pub fn select_promotion(&mut self, label: &str) -> SubmitOutcome {
        match self.promotion.select(label) {
            Some(request) => self.submit(request),
            None => SubmitOutcome::Ignored,
        }
    }

    pub fn cancel_promotion(&mut self) {
        self.promotion.cancel();
    }

    /// Check, apply, repaint, then test for the end of the game.
    pub fn submit(&mut self, request: MoveRequest) -> SubmitOutcome {
        if !self.engine.is_legal_move(request.from, request.to) {
            tracing::debug!("[MOVE] {}{} is illegal", request.from, request.to);
            return SubmitOutcome::Illegal;
        }
        if !self.engine.apply_move(request) {
            tracing::warn!("[MOVE] Engine did not apply {}{}", request.from, request.to);
            return SubmitOutcome::Illegal;
        }
        tracing::info!("[MOVE] {}{}", request.from, request.to);

        self.repaint_from_engine();

        if let Some(outcome) = self.terminal_outcome() {
            self.game_over.signal(outcome);
            self.scheduled = None;
            return SubmitOutcome::GameOver(outcome);
        }
        SubmitOutcome::Applied
    }

    pub fn acknowledge_game_over(&mut self) {
        self.game_over.acknowledge();
    }

    /// Take the pending turn-loop ticket, if a step is due.
    pub fn take_scheduled_step(&mut self) -> Option<TurnTicket> {
        self.scheduled.take()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub(crate) fn game_over_mut(&mut self) -> &mut GameOverNotifier {
        &mut self.game_over
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn board(&self) -> &RenderedBoard {
        &self.board
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn input(&self) -> &MoveInput {
        &self.input
    }

    pub fn promotion(&self) -> &PromotionFlow {
        &self.promotion
    }

    pub fn game_over(&self) -> &GameOverNotifier {
        &self.game_over
    }

    pub fn clock(&self) -> &ClockIndicator {
        &self.clock
    }

    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
