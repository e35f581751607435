//! Pending pawn promotion, held while the chooser is open.

use crate::domain::{MoveRequest, PromotionChoice, Square};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromotionFlow {
    #[default]
    None,
    Pending { from: Square, to: Square },
}

impl PromotionFlow {
    pub fn is_pending(&self) -> bool {
        matches!(self, PromotionFlow::Pending { .. })
    }

    /// The chooser is shown exactly while a promotion is pending.
    pub fn chooser_visible(&self) -> bool {
        self.is_pending()
    }

    /// Hold `from`/`to` until a piece is chosen. Refused while another
    /// promotion is already pending.
    pub fn begin(&mut self, from: Square, to: Square) -> bool {
        if self.is_pending() {
            tracing::warn!("[PROMOTION] {}{} refused, another promotion is pending", from, to);
            return false;
        }
        *self = PromotionFlow::Pending { from, to };
        true
    }

    /// Resolve the pending promotion with a chooser label. The flow is back to
    /// `None` afterwards whether or not the label was understood.
    pub fn select(&mut self, label: &str) -> Option<MoveRequest> {
        let PromotionFlow::Pending { from, to } = std::mem::take(self) else {
            tracing::debug!("[PROMOTION] Selection {:?} with nothing pending", label);
            return None;
        };
        match PromotionChoice::from_label(label) {
            Some(choice) => Some(MoveRequest::new(from, to).with_promotion(choice)),
            None => {
                tracing::warn!("[PROMOTION] Unknown promotion piece {:?}", label);
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = PromotionFlow::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        Square::from_label(label).unwrap()
    }

    #[test]
    fn test_select_resolves_and_clears() {
        let mut flow = PromotionFlow::default();
        assert!(!flow.chooser_visible());
        assert!(flow.begin(sq("b7"), sq("b8")));
        assert!(flow.chooser_visible());

        let request = flow.select("rook").unwrap();
        assert_eq!(request.from, sq("b7"));
        assert_eq!(request.to, sq("b8"));
        assert_eq!(request.promotion, Some(PromotionChoice::Rook));
        assert_eq!(flow, PromotionFlow::None);
    }

    #[test]
    fn test_single_pending_promotion() {
        let mut flow = PromotionFlow::default();
        assert!(flow.begin(sq("b7"), sq("b8")));
        assert!(!flow.begin(sq("c7"), sq("c8")));
        assert_eq!(
            flow,
            PromotionFlow::Pending {
                from: sq("b7"),
                to: sq("b8")
            }
        );
    }

    #[test]
    fn test_unknown_label_still_clears() {
        let mut flow = PromotionFlow::default();
        flow.begin(sq("b2"), sq("b1"));
        assert_eq!(flow.select("king"), None);
        assert!(!flow.is_pending());
    }

    #[test]
    fn test_select_without_pending() {
        let mut flow = PromotionFlow::default();
        assert_eq!(flow.select("queen"), None);
    }

    #[test]
    fn test_cancel() {
        let mut flow = PromotionFlow::default();
        flow.begin(sq("b7"), sq("b8"));
        flow.cancel();
        assert!(!flow.chooser_visible());
    }
}
