use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::participant::{score_cards, Hand, Participant};

/// Default display name of the house seat.
pub const DEALER_NAME: &str = "Dealer";

/// The dealer draws while below this total and stands on anything at or above it.
///
/// Soft and hard 17 are treated alike.
pub const DEALER_STANDS_ON: u32 = 17;

/// A card as the table sees it while the dealer may be hiding one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "card", rename_all = "lowercase")]
pub enum CardView {
    Hidden,
    Revealed(Card),
}

impl CardView {
    pub fn card(&self) -> Option<Card> {
        match self {
            CardView::Hidden => None,
            CardView::Revealed(c) => Some(*c),
        }
    }
}

/// The house seat: a hand whose first card stays face down until revealed.
#[derive(Debug, Clone)]
pub struct Dealer {
    name: String,
    hand: Hand,
    hidden: bool,
}

impl Dealer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            hidden: true,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn hide_first_card(&mut self) {
        self.hidden = true;
    }

    pub fn reveal_hidden(&mut self) {
        self.hidden = false;
    }

    /// The hand with its first card masked while hidden.
    pub fn visible_cards(&self) -> Vec<CardView> {
        self.hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i == 0 && self.hidden {
                    CardView::Hidden
                } else {
                    CardView::Revealed(c)
                }
            })
            .collect()
    }

    /// Score of the exposed cards only.
    pub fn visible_score(&self) -> u32 {
        let skip = usize::from(self.hidden);
        score_cards(self.hand.cards().iter().skip(skip)).0
    }

    pub fn should_hit(&self) -> bool {
        self.score() < DEALER_STANDS_ON
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DEALER_NAME)
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn reset_hand(&mut self) {
        self.hand.clear();
        self.hide_first_card();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn dealer_with(ranks: &[Rank]) -> Dealer {
        let mut d = Dealer::default();
        for &r in ranks {
            d.receive(Card::new(r, Suit::Clubs));
        }
        d
    }

    #[test]
    fn stands_on_seventeen() {
        assert!(!dealer_with(&[Rank::Ten, Rank::Seven]).should_hit());
        assert!(dealer_with(&[Rank::Ten, Rank::Six]).should_hit());
    }

    #[test]
    fn soft_seventeen_also_stands() {
        assert!(!dealer_with(&[Rank::Ace, Rank::Six]).should_hit());
    }

    #[test]
    fn first_card_masked_until_revealed() {
        let mut d = dealer_with(&[Rank::King, Rank::Five]);
        let view = d.visible_cards();
        assert_eq!(view[0], CardView::Hidden);
        assert_eq!(view[1], CardView::Revealed(Card::new(Rank::Five, Suit::Clubs)));
        assert_eq!(d.visible_score(), 5);

        d.reveal_hidden();
        d.reveal_hidden();
        assert!(d.visible_cards().iter().all(|v| v.card().is_some()));
        assert_eq!(d.visible_score(), 15);
    }

    #[test]
    fn empty_hand_has_no_visible_cards() {
        assert!(Dealer::default().visible_cards().is_empty());
    }

    #[test]
    fn hide_first_card_masks_again_after_reveal() {
        let mut d = dealer_with(&[Rank::Nine, Rank::Four]);
        d.reveal_hidden();
        assert_eq!(d.visible_score(), 13);
        d.hide_first_card();
        assert_eq!(d.visible_cards()[0], CardView::Hidden);
        assert_eq!(d.visible_score(), 4);
        assert_eq!(d.score(), 13);
    }

    #[test]
    fn reset_hides_again() {
        let mut d = dealer_with(&[Rank::Two]);
        d.reveal_hidden();
        d.reset_hand();
        assert!(d.is_hidden());
        assert!(d.cards().is_empty());
    }
}
