use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, DECK_SIZE};

/// Chooses which of the remaining cards is dealt next.
///
/// `pick` receives the live (undealt) cards and returns an index into that
/// slice. Returning an out-of-range index is tolerated: the deck reduces it
/// modulo the live count.
pub trait DrawSource {
    fn pick(&mut self, live: &[Card]) -> usize;
}

/// Uniformly random draw backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomDraw<R> {
    rng: R,
}

impl<R: Rng> RandomDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for RandomDraw<R> {
    fn pick(&mut self, live: &[Card]) -> usize {
        self.rng.random_range(0..live.len())
    }
}

/// The deck: 52 cards held in a fixed array, `live` of which are still undealt.
///
/// Cards in `cards[..live]` are undealt. Dealing swaps the chosen card to the
/// end of the live region and shrinks it, so a dealt card cannot come back
/// until [`Deck::reset`].
///
/// # Examples
///
/// ```
/// use twentyone_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// let hand = deck.deal(2);
/// assert_eq!(hand.len(), 2);
/// assert_eq!(deck.cards_left(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck<S = RandomDraw<ChaCha20Rng>> {
    cards: [Card; DECK_SIZE],
    live: usize,
    source: S,
}

impl Deck {
    /// Deterministic deck: the same seed always deals the same sequence.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(RandomDraw::new(ChaCha20Rng::seed_from_u64(seed)))
    }

    /// Fresh random seed per deck, for matches that need no replay.
    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }
}

impl<S: DrawSource> Deck<S> {
    pub fn new(source: S) -> Self {
        Self {
            cards: full_deck(),
            live: DECK_SIZE,
            source,
        }
    }

    /// Refill to all 52 cards.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.live = DECK_SIZE;
    }

    /// Remove and return one of the remaining cards, resetting first if none are left.
    pub fn deal_one(&mut self) -> Card {
        if self.live == 0 {
            tracing::debug!("deck exhausted mid-deal, resetting");
            self.reset();
        }
        let idx = self.source.pick(&self.cards[..self.live]) % self.live;
        let last = self.live - 1;
        self.cards.swap(idx, last);
        self.live = last;
        self.cards[last]
    }

    /// Deal `n` cards, in the order they were dealt.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.deal_one()).collect()
    }

    pub fn cards_left(&self) -> usize {
        self.live
    }

    /// The undealt cards, in no particular order.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[..self.live]
    }
}
