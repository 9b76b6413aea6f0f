#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use twentyone_engine::cards::{Card, Rank};
use twentyone_engine::deck::DrawSource;
use twentyone_engine::events::GameEvent;
use twentyone_engine::game::{Decision, TableAdapter, TableView};

/// Deals the scripted ranks in order, then falls back to the first live card.
pub struct ScriptedDraw {
    ranks: VecDeque<Rank>,
}

impl ScriptedDraw {
    pub fn new(ranks: &[Rank]) -> Self {
        Self {
            ranks: ranks.iter().copied().collect(),
        }
    }
}

impl DrawSource for ScriptedDraw {
    fn pick(&mut self, live: &[Card]) -> usize {
        self.ranks
            .pop_front()
            .and_then(|r| live.iter().position(|c| c.rank == r))
            .unwrap_or(0)
    }
}

/// Adapter that replays canned answers and records every event.
#[derive(Default)]
pub struct Recorder {
    pub decisions: VecDeque<Decision>,
    pub again: VecDeque<bool>,
    pub events: Vec<GameEvent>,
    pub turns_asked: usize,
    pub again_asked: usize,
}

impl Recorder {
    pub fn new(decisions: &[Decision], again: &[bool]) -> Self {
        Self {
            decisions: decisions.iter().copied().collect(),
            again: again.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn has(&self, pred: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }
}

impl TableAdapter for Recorder {
    type Error = Infallible;

    fn hit_or_stay(&mut self, _view: &TableView) -> Result<Decision, Infallible> {
        self.turns_asked += 1;
        Ok(self.decisions.pop_front().unwrap_or(Decision::Stay))
    }

    fn play_again(&mut self, _balance: i64) -> Result<bool, Infallible> {
        self.again_asked += 1;
        Ok(self.again.pop_front().unwrap_or(false))
    }

    fn notify(&mut self, event: &GameEvent) -> Result<(), Infallible> {
        self.events.push(event.clone());
        Ok(())
    }
}
