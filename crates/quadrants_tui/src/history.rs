//! Append-only flat-file history store.
//!
//! Owns the on-disk format: a leading summary line of four integers
//! (total games, wins, draws, quits) followed by one line per game with
//! the outcome tag and both player names, space-separated. The engine
//! never touches this file; persistence failures degrade to "statistics
//! not recorded" and are only logged.

use derive_getters::Getters;
use quadrants::{Outcome, Player};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Outcome tag as written to the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedOutcome {
    /// Player A won.
    WonA,
    /// Player B won.
    WonB,
    /// Board filled with no winner.
    Draw,
    /// Session abandoned.
    Quit,
}

impl RecordedOutcome {
    /// Maps a terminal engine outcome to its tag; `None` for a game
    /// still in progress.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Won(Player::A) => Some(Self::WonA),
            Outcome::Won(Player::B) => Some(Self::WonB),
            Outcome::Draw => Some(Self::Draw),
            Outcome::Quit => Some(Self::Quit),
            Outcome::InProgress => None,
        }
    }

    /// The tag written to the file.
    pub fn tag(self) -> &'static str {
        match self {
            Self::WonA => "WonA",
            Self::WonB => "WonB",
            Self::Draw => "Draw",
            Self::Quit => "Quit",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "WonA" => Some(Self::WonA),
            "WonB" => Some(Self::WonB),
            "Draw" => Some(Self::Draw),
            "Quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// One completed game as stored in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameRecord {
    /// How the game ended.
    outcome: RecordedOutcome,
    /// Name of player A.
    player_a: String,
    /// Name of player B.
    player_b: String,
}

/// The leading summary counters of the history file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Summary {
    /// Total recorded games.
    total: u32,
    /// Wins by either player.
    wins: u32,
    /// Drawn games.
    draws: u32,
    /// Abandoned games.
    quits: u32,
}

/// Flat-file store of completed-game outcomes.
#[derive(Debug, Getters)]
pub struct HistoryStore {
    path: PathBuf,
    summary: Summary,
    records: Vec<GameRecord>,
}

impl HistoryStore {
    /// Loads the store from `path`.
    ///
    /// A missing or unreadable file yields an empty store; malformed
    /// record lines are skipped with a warning. Play is never blocked by
    /// a bad history file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!(error = %e, "No readable history file, starting empty");
                return Self {
                    path,
                    summary: Summary::default(),
                    records: Vec::new(),
                };
            }
        };

        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let summary = lines.next().and_then(parse_summary).unwrap_or_else(|| {
            warn!("History summary line missing or malformed, starting empty");
            Summary::default()
        });

        let records: Vec<GameRecord> = lines
            .filter_map(|line| {
                let record = parse_record(line);
                if record.is_none() {
                    warn!(line, "Skipping malformed history record");
                }
                record
            })
            .collect();

        info!(games = records.len(), "History loaded");
        Self {
            path,
            summary,
            records,
        }
    }

    /// Records a completed game and rewrites the file.
    ///
    /// Ignores non-terminal outcomes. On write failure the in-memory
    /// counters still advance; only the on-disk statistics are lost.
    #[instrument(skip(self, player_a, player_b), fields(outcome = %outcome))]
    pub fn record(&mut self, outcome: Outcome, player_a: &str, player_b: &str) {
        let Some(recorded) = RecordedOutcome::from_outcome(outcome) else {
            warn!("Refusing to record a game still in progress");
            return;
        };

        self.summary.total += 1;
        match recorded {
            RecordedOutcome::WonA | RecordedOutcome::WonB => self.summary.wins += 1,
            RecordedOutcome::Draw => self.summary.draws += 1,
            RecordedOutcome::Quit => self.summary.quits += 1,
        }
        self.records.push(GameRecord {
            outcome: recorded,
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
        });

        self.save();
    }

    /// Resets the store to zero games and rewrites the file.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting history");
        self.summary = Summary::default();
        self.records.clear();
        self.save();
    }

    fn save(&self) {
        let mut content = format!(
            "{} {} {} {}\n",
            self.summary.total, self.summary.wins, self.summary.draws, self.summary.quits
        );
        for record in &self.records {
            content.push_str(&format!(
                "{} {} {}\n",
                record.outcome.tag(),
                record.player_a,
                record.player_b
            ));
        }

        if let Err(e) = std::fs::write(&self.path, content) {
            warn!(error = %e, path = %self.path.display(), "Statistics not recorded");
        }
    }
}

fn parse_summary(line: &str) -> Option<Summary> {
    let mut fields = line.split_whitespace().map(|f| f.parse::<u32>().ok());
    let summary = Summary {
        total: fields.next()??,
        wins: fields.next()??,
        draws: fields.next()??,
        quits: fields.next()??,
    };
    Some(summary)
}

fn parse_record(line: &str) -> Option<GameRecord> {
    let mut fields = line.split_whitespace();
    let outcome = RecordedOutcome::from_tag(fields.next()?)?;
    let player_a = fields.next()?.to_string();
    let player_b = fields.next()?.to_string();
    Some(GameRecord {
        outcome,
        player_a,
        player_b,
    })
}
