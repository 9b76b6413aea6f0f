//! # twentyone-engine: Twenty-One Round Engine
//!
//! A deterministic engine for a blackjack-style game of one player against one
//! dealer with a fixed unit wager per round. Rendering and input handling are
//! left to adapters implementing [`game::TableAdapter`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and point values
//! - [`deck`] - Non-repeating 52-card deck with an injectable draw source
//! - [`participant`] - Hands, soft/hard Ace scoring and the shared [`participant::Participant`] trait
//! - [`player`] / [`dealer`] - The two seats; the dealer hides its first card and stands on 17
//! - [`bookie`] - Bankroll bounded by a ruin floor and a cash-out ceiling
//! - [`game`] - Round states, decisions, the adapter boundary and round resolution
//! - [`engine`] - The state machine driving a match
//! - [`events`] - Display notifications and match summaries
//! - [`errors`] - Error types for engine construction
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use twentyone_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.deal(10), b.deal(10));
//! ```
//!
//! ## Scoring
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_engine::participant::Participant;
//! use twentyone_engine::player::Player;
//!
//! let mut p = Player::default();
//! p.receive(Card::new(Rank::Ace, Suit::Spades));
//! p.receive(Card::new(Rank::King, Suit::Hearts));
//! assert_eq!(p.score(), 21);
//! ```

pub mod bookie;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod participant;
pub mod player;
