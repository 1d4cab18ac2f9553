mod helpers;

use helpers::Rigged;
use pokerbots_engine::cards::{Card, Rank as R, Suit as S};
use pokerbots_engine::hand::StandardEvaluator;
use pokerbots_engine::player::Player;
use pokerbots_engine::pot::commit;
use pokerbots_engine::showdown::{resolve, SettlementKind};

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

/// Seat 0 holds 2c 3c, seat 1 holds 4c 5c, matching the rigged evaluator.
fn seated(stacks: [u32; 2], pots: [u32; 2]) -> [Player; 2] {
    let mut players = [Player::new("a", stacks[0]), Player::new("b", stacks[1])];
    players[0].reset_for_round([c(R::Two, S::Clubs), c(R::Three, S::Clubs)]);
    players[1].reset_for_round([c(R::Four, S::Clubs), c(R::Five, S::Clubs)]);
    commit(&mut players[0], pots[0]).unwrap();
    commit(&mut players[1], pots[1]).unwrap();
    players
}

#[test]
fn covered_winner_takes_the_whole_pot() {
    let mut players = seated([1_000, 1_000], [300, 300]);
    let s = resolve(&mut players, &[], &Rigged { winner: Some(1) }).unwrap();
    assert_eq!(s.kind, SettlementKind::Showdown);
    assert_eq!(s.winners, vec![1]);
    assert_eq!(s.payouts, [0, 600]);
    assert_eq!(players[0].stack(), 700);
    assert_eq!(players[1].stack(), 1_300);
    assert_eq!(s.refunded(), None);
}

#[test]
fn short_stacked_winner_doubles_up_and_excess_is_returned() {
    let mut players = seated([100, 10_000], [100, 520]);
    let s = resolve(&mut players, &[], &Rigged { winner: Some(0) }).unwrap();
    assert_eq!(s.payouts, [200, 420]);
    assert_eq!(players[0].stack(), 200);
    assert_eq!(players[1].stack(), 10_000 - 520 + 420);
    assert_eq!(s.refunded(), Some(420));
}

#[test]
fn tie_returns_each_pot_to_its_owner_even_when_unequal() {
    let mut players = seated([30, 1_000], [30, 40]);
    let s = resolve(&mut players, &[], &Rigged { winner: None }).unwrap();
    assert_eq!(s.kind, SettlementKind::Split);
    assert_eq!(s.winners, vec![0, 1]);
    assert_eq!(s.payouts, [30, 40]);
    assert_eq!(players[0].stack(), 30);
    assert_eq!(players[1].stack(), 1_000);
}

#[test]
fn pots_are_read_not_cleared() {
    let mut players = seated([500, 500], [200, 200]);
    resolve(&mut players, &[], &Rigged { winner: Some(0) }).unwrap();
    assert_eq!(players[0].pot(), 200);
    assert_eq!(players[1].pot(), 200);
}

#[test]
fn real_evaluator_picks_the_better_hand() {
    let mut players = [Player::new("a", 500), Player::new("b", 500)];
    players[0].reset_for_round([c(R::Ace, S::Spades), c(R::Ace, S::Hearts)]);
    players[1].reset_for_round([c(R::King, S::Spades), c(R::Queen, S::Hearts)]);
    commit(&mut players[0], 50).unwrap();
    commit(&mut players[1], 50).unwrap();
    let board = [
        c(R::Two, S::Clubs),
        c(R::Seven, S::Diamonds),
        c(R::Nine, S::Hearts),
        c(R::Jack, S::Clubs),
        c(R::Four, S::Spades),
    ];
    let s = resolve(&mut players, &board, &StandardEvaluator).unwrap();
    assert_eq!(s.winners, vec![0]);
    assert_eq!(players[0].stack(), 550);
}
