use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::bookie::Bookie;
use crate::dealer::Dealer;
use crate::deck::{Deck, DrawSource, RandomDraw};
use crate::events::{GameEvent, MatchEnd, MatchSummary};
use crate::game::{resolve, Decision, RoundState, TableAdapter, TableView};
use crate::participant::Participant;
use crate::player::Player;

/// The deck is rebuilt at round start once fewer than this many cards remain.
pub const RESHUFFLE_THRESHOLD: usize = 10;

/// Runs a Twenty-One match: one player, one dealer, a persistent deck and bankroll.
///
/// Each call to [`TwentyOne::step`] advances exactly one [`RoundState`]. The
/// engine owns all of its table state; separate matches never share anything.
///
/// # Examples
///
/// ```
/// use twentyone_engine::bookie::Bookie;
/// use twentyone_engine::engine::TwentyOne;
/// use twentyone_engine::events::GameEvent;
/// use twentyone_engine::game::{Decision, TableAdapter, TableView};
///
/// struct AlwaysStay;
///
/// impl TableAdapter for AlwaysStay {
///     type Error = std::convert::Infallible;
///     fn hit_or_stay(&mut self, _: &TableView) -> Result<Decision, Self::Error> {
///         Ok(Decision::Stay)
///     }
///     fn play_again(&mut self, _: i64) -> Result<bool, Self::Error> {
///         Ok(false)
///     }
///     fn notify(&mut self, _: &GameEvent) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let mut game = TwentyOne::with_seed(7, Bookie::default());
/// let summary = game.play_match(&mut AlwaysStay).unwrap();
/// assert_eq!(summary.rounds, 1);
/// ```
#[derive(Debug)]
pub struct TwentyOne<S = RandomDraw<ChaCha20Rng>> {
    deck: Deck<S>,
    player: Player,
    dealer: Dealer,
    bookie: Bookie,
    state: RoundState,
    summary: MatchSummary,
}

impl TwentyOne {
    pub fn with_seed(seed: u64, bookie: Bookie) -> Self {
        Self::new(
            Deck::new_with_seed(seed),
            Player::default(),
            Dealer::default(),
            bookie,
        )
    }

    /// Unseeded match; the deck draws from OS entropy.
    pub fn from_entropy(bookie: Bookie) -> Self {
        Self::new(Deck::from_entropy(), Player::default(), Dealer::default(), bookie)
    }
}

impl<S: DrawSource> TwentyOne<S> {
    pub fn new(deck: Deck<S>, player: Player, dealer: Dealer, bookie: Bookie) -> Self {
        let summary = MatchSummary {
            final_balance: bookie.balance(),
            ..MatchSummary::default()
        };
        Self {
            deck,
            player,
            dealer,
            bookie,
            state: RoundState::RoundStart,
            summary,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn deck(&self) -> &Deck<S> {
        &self.deck
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
    pub fn bookie(&self) -> &Bookie {
        &self.bookie
    }
    pub fn summary(&self) -> &MatchSummary {
        &self.summary
    }
    pub fn is_finished(&self) -> bool {
        self.state == RoundState::Finished
    }

    pub fn view(&self) -> TableView {
        TableView::capture(&self.player, &self.dealer)
    }

    /// Advance one state and return the state the engine moved to.
    ///
    /// Once `Finished`, further calls are no-ops.
    pub fn step<A: TableAdapter>(&mut self, adapter: &mut A) -> Result<RoundState, A::Error> {
        let next = match self.state {
            RoundState::RoundStart => {
                self.start_round();
                RoundState::Deal
            }
            RoundState::Deal => {
                self.deal_opening();
                adapter.notify(&GameEvent::RoundStarted {
                    round: self.summary.rounds,
                    table: self.view(),
                })?;
                RoundState::PlayerTurn
            }
            RoundState::PlayerTurn => {
                self.player_turn(adapter)?;
                if self.player.is_busted() {
                    RoundState::Resolve
                } else {
                    RoundState::DealerTurn
                }
            }
            RoundState::DealerTurn => {
                self.dealer_turn(adapter)?;
                RoundState::Resolve
            }
            RoundState::Resolve => RoundState::Payout(resolve(&self.player, &self.dealer)),
            RoundState::Payout(outcome) => {
                self.bookie.settle(outcome);
                self.summary.record(outcome);
                self.summary.final_balance = self.bookie.balance();
                info!(
                    round = self.summary.rounds,
                    ?outcome,
                    player = self.player.score(),
                    dealer = self.dealer.score(),
                    balance = self.bookie.balance(),
                    "round settled"
                );
                self.dealer.reveal_hidden();
                adapter.notify(&GameEvent::FinalHands { table: self.view() })?;
                adapter.notify(&GameEvent::RoundResult { outcome })?;
                adapter.notify(&GameEvent::Balance {
                    balance: self.bookie.balance(),
                })?;
                RoundState::ContinueCheck
            }
            RoundState::ContinueCheck => match self.continue_check(adapter)? {
                None => RoundState::RoundStart,
                Some(end) => {
                    self.summary.end = Some(end);
                    info!(
                        rounds = self.summary.rounds,
                        balance = self.bookie.balance(),
                        ?end,
                        "match finished"
                    );
                    adapter.notify(&GameEvent::MatchEnded {
                        summary: self.summary.clone(),
                    })?;
                    RoundState::Finished
                }
            },
            RoundState::Finished => RoundState::Finished,
        };
        debug!(from = ?self.state, to = ?next, round = self.summary.rounds, "state transition");
        self.state = next;
        Ok(next)
    }

    /// Run until the current round is over: back at `RoundStart` or `Finished`.
    pub fn play_round<A: TableAdapter>(&mut self, adapter: &mut A) -> Result<RoundState, A::Error> {
        loop {
            match self.step(adapter)? {
                s @ (RoundState::RoundStart | RoundState::Finished) => return Ok(s),
                _ => continue,
            }
        }
    }

    /// Play rounds until the bookie or the player ends the match.
    pub fn play_match<A: TableAdapter>(&mut self, adapter: &mut A) -> Result<MatchSummary, A::Error> {
        if self.state == RoundState::RoundStart && self.summary.rounds == 0 {
            adapter.notify(&GameEvent::MatchStarted {
                balance: self.bookie.balance(),
            })?;
        }
        while self.play_round(adapter)? != RoundState::Finished {}
        Ok(self.summary.clone())
    }

    fn start_round(&mut self) {
        if self.deck.cards_left() < RESHUFFLE_THRESHOLD {
            debug!(cards_left = self.deck.cards_left(), "reshuffling deck");
            self.deck.reset();
        }
        self.player.reset_hand();
        self.dealer.reset_hand();
        self.summary.rounds += 1;
    }

    fn deal_opening(&mut self) {
        for _ in 0..2 {
            self.player.receive(self.deck.deal_one());
            self.dealer.receive(self.deck.deal_one());
        }
    }

    fn player_turn<A: TableAdapter>(&mut self, adapter: &mut A) -> Result<(), A::Error> {
        loop {
            match adapter.hit_or_stay(&self.view())? {
                Decision::Hit => {
                    let card = self.deck.deal_one();
                    self.player.receive(card);
                    adapter.notify(&GameEvent::PlayerDrew {
                        card,
                        table: self.view(),
                    })?;
                    if self.player.is_busted() {
                        debug!(score = self.player.score(), "player busted");
                        return Ok(());
                    }
                }
                Decision::Stay => return Ok(()),
            }
        }
    }

    fn dealer_turn<A: TableAdapter>(&mut self, adapter: &mut A) -> Result<(), A::Error> {
        self.dealer.reveal_hidden();
        adapter.notify(&GameEvent::DealerRevealed { table: self.view() })?;
        while self.dealer.should_hit() {
            let card = self.deck.deal_one();
            self.dealer.receive(card);
            adapter.notify(&GameEvent::DealerDrew {
                card,
                table: self.view(),
            })?;
        }
        Ok(())
    }

    /// `None` to keep playing, otherwise why the match ends. The player is
    /// only asked when the bookie allows another round.
    fn continue_check<A: TableAdapter>(
        &mut self,
        adapter: &mut A,
    ) -> Result<Option<MatchEnd>, A::Error> {
        if self.bookie.is_broke() {
            return Ok(Some(MatchEnd::Broke));
        }
        if self.bookie.is_rich() {
            return Ok(Some(MatchEnd::Rich));
        }
        if adapter.play_again(self.bookie.balance())? {
            Ok(None)
        } else {
            Ok(Some(MatchEnd::Declined))
        }
    }
}
