use crate::participant::{Hand, Participant};

/// Default display name of the human seat.
pub const PLAYER_NAME: &str = "You";

/// The human seat. Carries nothing beyond its name and hand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_NAME)
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
