use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bankroll bounds: min {min} must be below max {max}")]
    InvalidBankroll { min: i64, max: i64 },
}
