use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::dealer::Dealer;
use twentyone_engine::participant::Participant;
use twentyone_engine::player::Player;

fn deal_to<P: Participant>(p: &mut P, ranks: &[Rank]) {
    for &r in ranks {
        p.receive(Card::new(r, Suit::Spades));
    }
}

#[test]
fn ace_king_is_natural_21() {
    let mut p = Player::default();
    deal_to(&mut p, &[Rank::Ace, Rank::King]);
    assert_eq!(p.score(), 21);
}

#[test]
fn two_aces_and_nine_is_21() {
    let mut p = Player::default();
    deal_to(&mut p, &[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(p.score(), 21);
}

#[test]
fn three_aces_and_eight_is_21() {
    let mut p = Player::default();
    deal_to(&mut p, &[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight]);
    assert_eq!(p.score(), 21);
}

#[test]
fn king_on_seventeen_busts() {
    let mut p = Player::default();
    deal_to(&mut p, &[Rank::Nine, Rank::Eight]);
    assert_eq!(p.score(), 17);
    deal_to(&mut p, &[Rank::King]);
    assert_eq!(p.score(), 27);
    assert!(p.is_busted());
}

#[test]
fn dealer_standing_boundary() {
    let mut d = Dealer::default();
    deal_to(&mut d, &[Rank::Ten, Rank::Seven]);
    assert!(!d.should_hit());

    let mut d = Dealer::default();
    deal_to(&mut d, &[Rank::Ten, Rank::Six]);
    assert!(d.should_hit());
}

#[test]
fn ace_survives_until_it_must_drop() {
    let mut p = Player::default();
    deal_to(&mut p, &[Rank::Ace, Rank::Five]);
    assert_eq!(p.score(), 16);
    assert!(p.hand().is_soft());
    deal_to(&mut p, &[Rank::Ten]);
    assert_eq!(p.score(), 16);
    assert!(!p.hand().is_soft());
}
