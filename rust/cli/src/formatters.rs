//! Text rendering of engine events.
//!
//! Pure functions: each event becomes zero or more display lines. The wording
//! follows the classic console game ("Player: ... (total: N)", "Bank: $N").

use twentyone_engine::bookie::Outcome;
use twentyone_engine::cards::Card;
use twentyone_engine::dealer::CardView;
use twentyone_engine::events::{GameEvent, MatchEnd};
use twentyone_engine::game::TableView;

/// Placeholder shown for the dealer's face-down card.
pub const HIDDEN_CARD: &str = "<hidden>";

pub fn format_card(card: &Card) -> String {
    card.label()
}

pub fn format_card_view(view: &CardView) -> String {
    match view {
        CardView::Hidden => HIDDEN_CARD.to_string(),
        CardView::Revealed(c) => format_card(c),
    }
}

/// Comma-separated card labels.
///
/// ```rust
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// # use twentyone_cli::formatters::format_cards;
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Nine, Suit::Hearts)];
/// assert_eq!(format_cards(&hand), "Ace of Spades, Nine of Hearts");
/// ```
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

pub fn format_player_line(table: &TableView) -> String {
    format!(
        "Player: {} (total: {})",
        format_cards(&table.player),
        table.player_score
    )
}

/// Dealer line; the total is only shown once the hidden card is up.
pub fn format_dealer_line(table: &TableView) -> String {
    let cards = table
        .dealer
        .iter()
        .map(format_card_view)
        .collect::<Vec<_>>()
        .join(", ");
    match table.dealer_score {
        Some(total) => format!("Dealer: {} (total: {})", cards, total),
        None => format!("Dealer: {}", cards),
    }
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "You win!",
        Outcome::Dealer => "Dealer wins.",
        Outcome::Tie => "It's a tie.",
    }
}

pub fn format_match_end(end: MatchEnd) -> &'static str {
    match end {
        MatchEnd::Broke => "You're out of money.",
        MatchEnd::Rich => "You've hit the cash-out limit!",
        MatchEnd::Declined => "Match over.",
    }
}

pub fn render_event(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::MatchStarted { .. } => vec!["Welcome to TwentyOne!".to_string()],
        GameEvent::RoundStarted { round, table } => vec![
            format!("Round {}", round),
            format_player_line(table),
            format_dealer_line(table),
        ],
        GameEvent::PlayerDrew { table, .. }
        | GameEvent::DealerRevealed { table }
        | GameEvent::DealerDrew { table, .. } => {
            vec![format_player_line(table), format_dealer_line(table)]
        }
        GameEvent::FinalHands { table } => vec![
            String::new(),
            "Final hands:".to_string(),
            format_player_line(table),
            format_dealer_line(table),
        ],
        GameEvent::RoundResult { outcome } => vec![format_outcome(*outcome).to_string()],
        GameEvent::Balance { balance } => vec![format!("Bank: ${}", balance)],
        GameEvent::MatchEnded { summary } => {
            let mut lines = Vec::new();
            if let Some(end) = summary.end
                && end != MatchEnd::Declined
            {
                lines.push(format_match_end(end).to_string());
            }
            lines.push("Thanks for playing! Goodbye!".to_string());
            lines
        }
    }
}
