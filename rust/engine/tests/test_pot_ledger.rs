use pokerbots_engine::errors::GameError;
use pokerbots_engine::player::Player;
use pokerbots_engine::pot::{amount_owed, commit, differential, is_balanced, total};

#[test]
fn blinds_leave_small_blind_owing_the_difference() {
    let mut players = [Player::new("sb", 1_000), Player::new("bb", 1_000)];
    commit(&mut players[0], 20).unwrap();
    commit(&mut players[1], 40).unwrap();
    assert_eq!(differential(&players, 0), 20);
    assert_eq!(amount_owed(&players, 0), 20);
    assert_eq!(amount_owed(&players, 1), 0);
    assert!(!is_balanced(&players));
    assert_eq!(total(&players), 60);
}

#[test]
fn stack_plus_pot_is_preserved_by_commits() {
    let mut p = Player::new("p", 300);
    for amount in [10, 0, 90, 200] {
        commit(&mut p, amount).unwrap();
        assert_eq!(p.stack() + p.pot(), 300);
    }
    assert!(p.is_all_in());
}

#[test]
fn commit_beyond_stack_is_rejected() {
    let mut p = Player::new("p", 30);
    assert_eq!(
        commit(&mut p, 31),
        Err(GameError::InsufficientChips {
            requested: 31,
            stack: 30
        })
    );
    assert_eq!(p.stack(), 30);
    assert_eq!(p.pot(), 0);
}
