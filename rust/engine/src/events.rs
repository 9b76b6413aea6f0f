//! Display notifications emitted by the round engine.
//!
//! The engine never renders anything itself; adapters receive these through
//! [`crate::game::TableAdapter::notify`] and decide how to show them.

use serde::{Deserialize, Serialize};

use crate::bookie::Outcome;
use crate::cards::Card;
use crate::game::TableView;

/// Why a match stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchEnd {
    /// Balance reached the ruin floor
    Broke,
    /// Balance reached the cash-out ceiling
    Rich,
    /// The player chose not to play again
    Declined,
}

/// Running totals for one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rounds: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
    pub final_balance: i64,
    /// `None` while the match is still running
    pub end: Option<MatchEnd>,
}

impl MatchSummary {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player_wins += 1,
            Outcome::Dealer => self.dealer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    MatchStarted { balance: i64 },
    /// Opening hands, dealer's first card face down
    RoundStarted { round: u32, table: TableView },
    PlayerDrew { card: Card, table: TableView },
    DealerRevealed { table: TableView },
    DealerDrew { card: Card, table: TableView },
    /// Both hands face up with totals
    FinalHands { table: TableView },
    RoundResult { outcome: Outcome },
    Balance { balance: i64 },
    MatchEnded { summary: MatchSummary },
}
