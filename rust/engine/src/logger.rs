use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundSummary;
use crate::player::ActionKind;
use crate::showdown::SettlementKind;

/// The four betting phases of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        })
    }
}

/// One applied decision. `amount` is what was committed (0 for fold/check).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: usize,
    pub street: Street,
    pub action: ActionKind,
    pub amount: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One line of a JSONL hand history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`
    pub hand_id: String,
    pub seed: Option<u64>,
    pub round: u32,
    pub dealer: usize,
    pub players: [String; 2],
    /// Chips posted as blinds, indexed by seat.
    pub blinds: [u32; 2],
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub stacks_before: [u32; 2],
    pub stacks_after: [u32; 2],
    pub result: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn from_summary(
        hand_id: String,
        seed: Option<u64>,
        players: [&str; 2],
        summary: &RoundSummary,
    ) -> Self {
        let settlement = &summary.settlement;
        let result = match settlement.winners.as_slice() {
            [w] => Some(players[*w].to_string()),
            _ => Some("split".to_string()),
        };
        let showdown = match settlement.kind {
            SettlementKind::Fold => None,
            SettlementKind::Showdown => Some(ShowdownInfo {
                winners: settlement.winners.clone(),
                notes: settlement
                    .refunded()
                    .map(|chips| format!("{} unmatched chips returned", chips)),
            }),
            SettlementKind::Split => Some(ShowdownInfo {
                winners: settlement.winners.clone(),
                notes: Some("split pot".to_string()),
            }),
        };
        Self {
            hand_id,
            seed,
            round: summary.round,
            dealer: summary.dealer,
            players: [players[0].to_string(), players[1].to_string()],
            blinds: summary.blinds,
            actions: summary.actions.clone(),
            board: summary.board.clone(),
            stacks_before: summary.stacks_before,
            stacks_after: summary.stacks_after,
            result,
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends hand records to a JSONL file, one object per LF-terminated line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; records are discarded.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
