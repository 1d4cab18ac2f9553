//! Terminal output helpers shared by the commands.

use std::io::Write;

use pokerbots_engine::game::RoundSummary;
use pokerbots_engine::player::Player;
use pokerbots_engine::showdown::SettlementKind;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// One line per round, e.g. `Round 3 (dealer P2): P1 wins 120 at showdown`.
pub fn round_line(summary: &RoundSummary, players: &[Player; 2]) -> String {
    let s = &summary.settlement;
    let dealer = players[summary.dealer].name();
    let outcome = match (s.kind, s.winners.as_slice()) {
        (SettlementKind::Split, _) => "split pot".to_string(),
        (kind, [w]) => {
            let how = if kind == SettlementKind::Fold {
                "after a fold"
            } else {
                "at showdown"
            };
            format!("{} wins {} {}", players[*w].name(), s.payouts[*w], how)
        }
        _ => "no winner".to_string(),
    };
    format!("Round {} (dealer {}): {}", summary.round, dealer, outcome)
}
