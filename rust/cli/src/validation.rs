//! Input parsing and validation for interactive commands.
//!
//! Raw terminal text is turned into the engine's enumerated answers here, so
//! nothing malformed ever reaches a round in progress.

use twentyone_engine::game::Decision;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// A valid answer
    Answer(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Anything else; the caller reprompts
    Invalid(String),
}

/// Parse a hit/stay answer (case-insensitive).
///
/// - "h" or "hit" → Hit
/// - "s" or "stay" → Stay
/// - "q" or "quit" → Quit
///
/// ```rust
/// # use twentyone_cli::validation::{parse_hit_or_stay, ParseResult};
/// use twentyone_engine::game::Decision;
///
/// assert_eq!(parse_hit_or_stay("H"), ParseResult::Answer(Decision::Hit));
/// assert_eq!(parse_hit_or_stay(" stay "), ParseResult::Answer(Decision::Stay));
/// assert_eq!(parse_hit_or_stay("quit"), ParseResult::Quit);
/// assert!(matches!(parse_hit_or_stay("double"), ParseResult::Invalid(_)));
/// ```
pub fn parse_hit_or_stay(input: &str) -> ParseResult<Decision> {
    match input.trim().to_lowercase().as_str() {
        "h" | "hit" => ParseResult::Answer(Decision::Hit),
        "s" | "stay" => ParseResult::Answer(Decision::Stay),
        "q" | "quit" => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input".to_string()),
        other => ParseResult::Invalid(format!("Unrecognized choice: {}", other)),
    }
}

/// Parse a play-again answer: "y"/"yes" or "n"/"no" (case-insensitive).
pub fn parse_play_again(input: &str) -> ParseResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => ParseResult::Answer(true),
        "n" | "no" => ParseResult::Answer(false),
        "q" | "quit" => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input".to_string()),
        other => ParseResult::Invalid(format!("Unrecognized choice: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_or_stay_accepts_short_and_long_forms() {
        for s in ["h", "hit", "HIT", " Hit\t"] {
            assert_eq!(parse_hit_or_stay(s), ParseResult::Answer(Decision::Hit));
        }
        for s in ["s", "stay", "STAY"] {
            assert_eq!(parse_hit_or_stay(s), ParseResult::Answer(Decision::Stay));
        }
    }

    #[test]
    fn hit_or_stay_rejects_everything_else() {
        assert_eq!(
            parse_hit_or_stay(""),
            ParseResult::Invalid("Empty input".to_string())
        );
        match parse_hit_or_stay("hold") {
            ParseResult::Invalid(msg) => assert!(msg.contains("hold")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn play_again_answers() {
        assert_eq!(parse_play_again("Y"), ParseResult::Answer(true));
        assert_eq!(parse_play_again("no"), ParseResult::Answer(false));
        assert_eq!(parse_play_again("q"), ParseResult::Quit);
        assert!(matches!(parse_play_again("maybe"), ParseResult::Invalid(_)));
    }
}
