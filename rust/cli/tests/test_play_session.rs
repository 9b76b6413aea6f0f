use std::io::Cursor;

use twentyone_cli::ConsoleSeat;
use twentyone_engine::bookie::Bookie;
use twentyone_engine::engine::TwentyOne;
use twentyone_engine::events::MatchEnd;

fn session(input: &str, seed: u64, bookie: Bookie) -> (Result<MatchEnd, String>, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();
    let mut game = TwentyOne::with_seed(seed, bookie);
    let result = game
        .play_match(&mut ConsoleSeat::new(&mut stdin, &mut out))
        .map(|s| s.end.expect("finished match has an end"))
        .map_err(|e| e.to_string());
    (result, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn declining_ends_after_first_round() {
    let (result, stdout) = session("stay\nno\n", 42, Bookie::default());
    assert_eq!(result, Ok(MatchEnd::Declined));
    assert!(stdout.contains("Hit or stay? [h/s]: "));
    assert!(stdout.contains("Play again? [y/n]: "));
    assert!(stdout.contains("Thanks for playing! Goodbye!"));
}

#[test]
fn one_unit_bankroll_ends_on_first_decisive_round() {
    // stay on every hand; the first loss takes the balance to the floor
    let input = "s\ny\n".repeat(200);
    let (result, stdout) = session(&input, 3, Bookie::new(1, 0, 2).unwrap());
    match result {
        Ok(MatchEnd::Broke) => {
            assert!(stdout.contains("You're out of money."));
            assert!(stdout.ends_with("Thanks for playing! Goodbye!\n"));
        }
        Ok(MatchEnd::Rich) => assert!(stdout.contains("Bank: $2")),
        other => panic!("expected the bookie to end the match, got {:?}", other),
    }
}

#[test]
fn garbage_never_reaches_the_engine() {
    let (result, stdout) = session("x\n\n42\nS\nwhat\nN\n", 8, Bookie::default());
    assert_eq!(result, Ok(MatchEnd::Declined));
    assert_eq!(
        stdout
            .matches("Please enter 'h' (hit) or 's' (stay).")
            .count(),
        3
    );
    assert_eq!(stdout.matches("Please enter 'y' or 'n'.").count(), 1);
}

#[test]
fn eof_mid_round_is_an_interruption() {
    let (result, _) = session("", 1, Bookie::default());
    let msg = result.unwrap_err();
    assert!(msg.contains("Interrupted"), "got {}", msg);
}
