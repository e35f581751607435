//! Game-over popup state and the side-to-move clock indicator.

use crate::domain::PieceColor;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: PieceColor },
    Draw,
}

impl GameOutcome {
    pub fn message(self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => format!("Checkmate! {} wins", winner.name()),
            GameOutcome::Draw => "Draw".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GameOverNotifier {
    outcome: Option<GameOutcome>,
    /// The popup stays up until acknowledged
    visible: bool,
}

impl GameOverNotifier {
    pub fn signal(&mut self, outcome: GameOutcome) {
        if self.outcome == Some(outcome) {
            return;
        }
        tracing::info!("[GAME] {}", outcome.message());
        self.outcome = Some(outcome);
        self.visible = true;
    }

    pub fn acknowledge(&mut self) {
        self.visible = false;
    }

    pub fn clear(&mut self) {
        self.outcome = None;
        self.visible = false;
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<String> {
        self.visible.then(|| self.outcome.map(GameOutcome::message)).flatten()
    }
}

/// Shows whose move it is, next to that side's edge of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockIndicator {
    pub to_move: PieceColor,
    pub computer_thinking: bool,
    /// Whether the side to move is drawn at the bottom edge
    pub at_bottom: bool,
}

impl ClockIndicator {
    pub fn update(&mut self, is_white_to_move: bool, is_computer_to_move: bool, flipped: bool) {
        self.to_move = if is_white_to_move {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        self.computer_thinking = is_computer_to_move;
        self.at_bottom = is_white_to_move != flipped;
    }

    pub fn label(&self) -> String {
        if self.computer_thinking {
            format!("{} to move (computer thinking...)", self.to_move.name())
        } else {
            format!("{} to move", self.to_move.name())
        }
    }
}

impl Default for ClockIndicator {
    fn default() -> Self {
        Self {
            to_move: PieceColor::White,
            computer_thinking: false,
            at_bottom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_and_acknowledge() {
        let mut notifier = GameOverNotifier::default();
        assert_eq!(notifier.message(), None);

        notifier.signal(GameOutcome::Checkmate {
            winner: PieceColor::Black,
        });
        assert!(notifier.is_visible());
        assert_eq!(notifier.message().as_deref(), Some("Checkmate! Black wins"));

        notifier.acknowledge();
        assert!(!notifier.is_visible());
        assert_eq!(notifier.message(), None);
        // a repeated signal for the same result does not reopen the popup
        notifier.signal(GameOutcome::Checkmate {
            winner: PieceColor::Black,
        });
        assert!(!notifier.is_visible());
        assert!(notifier.outcome().is_some());

        notifier.clear();
        assert_eq!(notifier.outcome(), None);
    }

    #[test]
    fn test_draw_message() {
        assert_eq!(GameOutcome::Draw.message(), "Draw");
    }

    #[test]
    fn test_clock_indicator_edges() {
        let mut clock = ClockIndicator::default();
        clock.update(true, false, false);
        assert!(clock.at_bottom);
        assert_eq!(clock.label(), "White to move");

        clock.update(false, false, true);
        assert!(clock.at_bottom);
        assert_eq!(clock.to_move, PieceColor::Black);

        clock.update(true, true, true);
        assert!(!clock.at_bottom);
        assert!(clock.label().contains("computer thinking"));
    }
}
