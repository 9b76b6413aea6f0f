use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Fixed stake per round.
pub const UNIT_WAGER: i64 = 1;

pub const DEFAULT_START: i64 = 5;
pub const DEFAULT_MIN_BALANCE: i64 = 0;
pub const DEFAULT_MAX_BALANCE: i64 = 10;

/// Who took the round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player,
    Dealer,
    Tie,
}

/// Keeps the player's bankroll and decides whether another round may be played.
///
/// The match is over once the balance falls to `min_balance` (ruin) or climbs
/// to `max_balance` (cash out).
///
/// ```
/// use twentyone_engine::bookie::Bookie;
///
/// let mut bookie = Bookie::new(1, 0, 3).unwrap();
/// bookie.lose();
/// assert!(bookie.is_broke());
/// assert!(!bookie.can_continue());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookie {
    balance: i64,
    min_balance: i64,
    max_balance: i64,
}

impl Bookie {
    pub fn new(start: i64, min_balance: i64, max_balance: i64) -> Result<Self, GameError> {
        if min_balance >= max_balance {
            return Err(GameError::InvalidBankroll {
                min: min_balance,
                max: max_balance,
            });
        }
        Ok(Self {
            balance: start,
            min_balance,
            max_balance,
        })
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
    pub fn min_balance(&self) -> i64 {
        self.min_balance
    }
    pub fn max_balance(&self) -> i64 {
        self.max_balance
    }

    pub fn win(&mut self) {
        self.balance += UNIT_WAGER;
    }

    pub fn lose(&mut self) {
        self.balance -= UNIT_WAGER;
    }

    /// Apply the payout for a resolved round. A push leaves the balance alone.
    pub fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.win(),
            Outcome::Dealer => self.lose(),
            Outcome::Tie => {}
        }
    }

    pub fn is_broke(&self) -> bool {
        self.balance <= self.min_balance
    }

    pub fn is_rich(&self) -> bool {
        self.balance >= self.max_balance
    }

    pub fn can_continue(&self) -> bool {
        !(self.is_broke() || self.is_rich())
    }
}

impl Default for Bookie {
    fn default() -> Self {
        Self {
            balance: DEFAULT_START,
            min_balance: DEFAULT_MIN_BALANCE,
            max_balance: DEFAULT_MAX_BALANCE,
        }
    }
}
