use serde::{Deserialize, Serialize};

use crate::bookie::Outcome;
use crate::cards::Card;
use crate::dealer::{CardView, Dealer};
use crate::events::GameEvent;
use crate::participant::Participant;
use crate::player::Player;

/// Phases of a round, in the order the engine walks them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundState {
    /// Reshuffle if the deck is low, clear hands, hide the dealer's first card
    RoundStart,
    /// Two cards each, player first
    Deal,
    /// Player hits until they stay or bust
    PlayerTurn,
    /// Dealer reveals and draws to 17; skipped when the player busted
    DealerTurn,
    Resolve,
    Payout(Outcome),
    /// Bookie and player both have to agree to another round
    ContinueCheck,
    Finished,
}

/// The only answers a player turn accepts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Hit,
    Stay,
}

/// What the table looks like from the player's chair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub player: Vec<Card>,
    pub player_score: u32,
    pub dealer: Vec<CardView>,
    /// Only present once the dealer's hidden card is face up
    pub dealer_score: Option<u32>,
}

impl TableView {
    pub fn capture(player: &Player, dealer: &Dealer) -> Self {
        Self {
            player: player.cards().to_vec(),
            player_score: player.score(),
            dealer: dealer.visible_cards(),
            dealer_score: (!dealer.is_hidden()).then(|| dealer.score()),
        }
    }
}

/// Boundary between the round engine and whatever talks to the human.
///
/// Implementations must only ever hand back enumerated values; reprompting on
/// malformed input happens on their side. `Error` is the adapter's own
/// failure (closed input, I/O); the engine only passes it through.
pub trait TableAdapter {
    type Error;

    fn hit_or_stay(&mut self, view: &TableView) -> Result<Decision, Self::Error>;

    fn play_again(&mut self, balance: i64) -> Result<bool, Self::Error>;

    fn notify(&mut self, event: &GameEvent) -> Result<(), Self::Error>;
}

/// Decide a finished round.
///
/// A bust settles the round before any comparison: the dealer's score is not
/// looked at when the player busted.
pub fn resolve<P, D>(player: &P, dealer: &D) -> Outcome
where
    P: Participant,
    D: Participant,
{
    if player.is_busted() {
        return Outcome::Dealer;
    }
    if dealer.is_busted() {
        return Outcome::Player;
    }
    let (p, d) = (player.score(), dealer.score());
    if p > d {
        Outcome::Player
    } else if d > p {
        Outcome::Dealer
    } else {
        Outcome::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn seat<P: Participant>(mut p: P, ranks: &[Rank]) -> P {
        for &r in ranks {
            p.receive(Card::new(r, Suit::Hearts));
        }
        p
    }

    #[test]
    fn player_bust_beats_dealer_bust() {
        let p = seat(Player::default(), &[Rank::Nine, Rank::Eight, Rank::King]);
        let d = seat(Dealer::default(), &[Rank::Ten, Rank::Six, Rank::Queen]);
        assert_eq!(resolve(&p, &d), Outcome::Dealer);
    }

    #[test]
    fn dealer_bust_pays_player() {
        let p = seat(Player::default(), &[Rank::Ten, Rank::Two]);
        let d = seat(Dealer::default(), &[Rank::Ten, Rank::Six, Rank::Queen]);
        assert_eq!(resolve(&p, &d), Outcome::Player);
    }

    #[test]
    fn higher_total_wins_and_equal_pushes() {
        let p = seat(Player::default(), &[Rank::Ten, Rank::Nine]);
        let d = seat(Dealer::default(), &[Rank::Ten, Rank::Eight]);
        assert_eq!(resolve(&p, &d), Outcome::Player);

        let d = seat(Dealer::default(), &[Rank::Ace, Rank::Eight]);
        assert_eq!(resolve(&p, &d), Outcome::Tie);

        let d = seat(Dealer::default(), &[Rank::King, Rank::Queen]);
        assert_eq!(resolve(&p, &d), Outcome::Dealer);
    }

    #[test]
    fn view_hides_dealer_total_until_reveal() {
        let p = seat(Player::default(), &[Rank::Ten, Rank::Seven]);
        let mut d = seat(Dealer::default(), &[Rank::Six, Rank::Five]);
        let v = TableView::capture(&p, &d);
        assert_eq!(v.player_score, 17);
        assert_eq!(v.dealer[0], CardView::Hidden);
        assert_eq!(v.dealer_score, None);

        d.reveal_hidden();
        assert_eq!(TableView::capture(&p, &d).dealer_score, Some(11));
    }
}
