use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Scores above this bust.
pub const BLACKJACK: u32 = 21;

/// Points an Ace gives up when it is demoted from 11 to 1.
const ACE_DEMOTION: u32 = 10;

/// Ordered cards held by one participant for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total and number of Aces still counted at 11 after demotion.
    fn totals(&self) -> (u32, usize) {
        score_cards(&self.cards)
    }

    /// Best total for the hand.
    ///
    /// Every Ace starts at 11; while the total is over 21 and an Ace is still
    /// at 11, one Ace is demoted to 1 and the total is re-checked.
    ///
    /// ```
    /// use twentyone_engine::cards::{Card, Rank, Suit};
    /// use twentyone_engine::participant::Hand;
    ///
    /// let mut hand = Hand::new();
    /// for rank in [Rank::Ace, Rank::Ace, Rank::Nine] {
    ///     hand.push(Card::new(rank, Suit::Spades));
    /// }
    /// assert_eq!(hand.score(), 21);
    /// ```
    pub fn score(&self) -> u32 {
        self.totals().0
    }

    /// True while at least one Ace is still counted at 11.
    pub fn is_soft(&self) -> bool {
        self.totals().1 > 0
    }

    pub fn is_busted(&self) -> bool {
        self.score() > BLACKJACK
    }
}

pub(crate) fn score_cards<'a, I>(cards: I) -> (u32, usize)
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total = 0;
    let mut soft_aces = 0;
    for card in cards {
        total += card.value();
        if card.is_ace() {
            soft_aces += 1;
        }
    }
    while total > BLACKJACK && soft_aces > 0 {
        total -= ACE_DEMOTION;
        soft_aces -= 1;
    }
    (total, soft_aces)
}

/// Capabilities shared by everyone seated at the table.
///
/// Implementors only expose their [`Hand`]; scoring and bust checks are
/// derived from it.
pub trait Participant {
    fn name(&self) -> &str;
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;

    fn receive(&mut self, card: Card) {
        self.hand_mut().push(card);
    }

    fn score(&self) -> u32 {
        self.hand().score()
    }

    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    fn cards(&self) -> &[Card] {
        self.hand().cards()
    }

    fn reset_hand(&mut self) {
        self.hand_mut().clear();
    }
}
