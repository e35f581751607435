//! Board orientation: whether black is drawn at the bottom.

use crate::domain::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orientation {
    flipped: bool,
}

impl Orientation {
    pub fn is_flipped(self) -> bool {
        self.flipped
    }

    pub fn reset(&mut self) {
        self.flipped = false;
    }

    /// Seat the human at the bottom after a reset: only a computer white
    /// against a human black starts flipped.
    pub fn seat_players(&mut self, white_is_computer: bool, black_is_computer: bool) -> bool {
        self.flipped = white_is_computer && !black_is_computer;
        self.flipped
    }

    /// Draw the board from the side of the human about to move. While the
    /// computer is to move the previous perspective is kept.
    pub fn recompute(&mut self, is_computer_to_move: bool, is_white_to_move: bool) -> bool {
        if !is_computer_to_move {
            self.flipped = !is_white_to_move;
        }
        self.flipped
    }

    /// Map a logical square to the visual grid, or back (the map is its own inverse).
    pub fn apply(self, square: Square) -> Square {
        if self.flipped {
            square.flipped()
        } else {
            square
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_to_move_sets_perspective() {
        let mut orientation = Orientation::default();
        assert!(!orientation.recompute(false, true));
        assert!(orientation.recompute(false, false));
        assert!(!orientation.recompute(false, true));
    }

    #[test]
    fn test_computer_to_move_keeps_perspective() {
        let mut orientation = Orientation::default();
        orientation.recompute(false, false);
        assert!(orientation.recompute(true, true));
        assert!(orientation.recompute(true, false));

        orientation.reset();
        assert!(!orientation.recompute(true, false));
    }

    #[test]
    fn test_seat_players() {
        let mut orientation = Orientation::default();
        assert!(orientation.seat_players(true, false));
        // computer to move: the seated perspective survives the recompute
        assert!(orientation.recompute(true, true));
        assert!(!orientation.seat_players(false, true));
        assert!(!orientation.seat_players(true, true));
        assert!(!orientation.seat_players(false, false));
    }

    #[test]
    fn test_apply() {
        let e4 = Square::from_label("e4").unwrap();
        let mut orientation = Orientation::default();
        assert_eq!(orientation.apply(e4), e4);
        orientation.recompute(false, false);
        assert_eq!(orientation.apply(e4).label(), "d5");
        assert_eq!(orientation.apply(orientation.apply(e4)), e4);
    }
}
