use pokerbots_ai::create_policy;
use pokerbots_engine::game::Game;
use pokerbots_engine::player::Player;

fn simulate(kinds: [&str; 2], seed: u64, rounds: u32) -> Game {
    let players = [Player::new("Igor", 10_000), Player::new("Ivan", 10_000)];
    let policies = [
        create_policy(kinds[0], Some(seed)).unwrap(),
        create_policy(kinds[1], Some(seed + 1)).unwrap(),
    ];
    let mut game = Game::new(players, policies, 20).with_seed(seed);
    game.play(rounds).expect("policies respect the offered actions");
    game
}

#[test]
fn calling_players_play_a_hundred_rounds() {
    let game = simulate(["call", "call"], 1, 100);
    assert_eq!(game.stacks().iter().sum::<u32>(), 20_000);
    assert!(game.rounds_played() >= 1);
}

#[test]
fn random_players_conserve_chips_across_seeds() {
    for seed in 0..20 {
        let game = simulate(["random", "random"], seed, 100);
        assert_eq!(game.stacks().iter().sum::<u32>(), 20_000, "seed {}", seed);
    }
}

#[test]
fn random_against_calling_finishes_or_runs_out_of_rounds() {
    let game = simulate(["random", "call"], 5, 100);
    assert!(game.is_over() || game.rounds_played() == 100);
}
