//! Append-only record of every settled hand. The table writes one `ScoreEntry` per player per
//! round, the console reads them back to display the score history.

use crate::outcome::Outcome;
use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use time::macros::format_description;
use time::OffsetDateTime;

/// One settled hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub timestamp: String,
    pub player_name: String,
    pub player_score: u32,
    pub dealer_score: u32,
    pub outcome: Outcome,
    pub balance: u32,
}

impl ScoreEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(
        player_name: impl Into<String>,
        player_score: u32,
        dealer_score: u32,
        outcome: Outcome,
        balance: u32,
    ) -> Self {
        ScoreEntry {
            timestamp: timestamp_now(),
            player_name: player_name.into(),
            player_score,
            dealer_score,
            outcome,
            balance,
        }
    }
}

/// Local time as `YYYY-MM-DD HH:MM:SS`, UTC when the local offset cannot be determined.
pub fn timestamp_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_default()
}

impl Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {} | Dealer: {} -> {} | Balance: {} tokens",
            self.timestamp,
            self.player_name,
            self.player_score,
            self.dealer_score,
            self.outcome,
            self.balance
        )
    }
}

impl FromStr for ScoreEntry {
    type Err = BlackjackGameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || BlackjackGameError::MalformedLogLine(line.to_string());
        let number = |s: &str| s.trim().parse::<u32>().map_err(|_| malformed());

        let rest = line.strip_prefix('[').ok_or_else(malformed)?;
        let (timestamp, rest) = rest.split_once("] ").ok_or_else(malformed)?;
        // names may contain `: `, so split the score off from the right
        let (player_part, rest) = rest.rsplit_once(" | Dealer: ").ok_or_else(malformed)?;
        let (player_name, player_score) = player_part.rsplit_once(": ").ok_or_else(malformed)?;
        let (dealer_score, rest) = rest.split_once(" -> ").ok_or_else(malformed)?;
        let (outcome, rest) = rest.split_once(" | Balance: ").ok_or_else(malformed)?;
        let balance = rest.strip_suffix(" tokens").ok_or_else(malformed)?;

        Ok(ScoreEntry {
            timestamp: timestamp.to_string(),
            player_name: player_name.to_string(),
            player_score: number(player_score)?,
            dealer_score: number(dealer_score)?,
            outcome: outcome.parse()?,
            balance: number(balance)?,
        })
    }
}

/// Writer the table records settled hands to. Injected into the table and tournament so that
/// nothing in the engine touches the file system directly.
pub trait ScoreLog {
    /// Appends one entry to the end of the log.
    fn append(&mut self, entry: &ScoreEntry) -> Result<(), BlackjackGameError>;
    /// Discards every entry, called when a new tournament starts.
    fn truncate(&mut self) -> Result<(), BlackjackGameError>;
    /// Reads back every entry in the order it was appended.
    fn entries(&self) -> Result<Vec<ScoreEntry>, BlackjackGameError>;
}

/// Score log stored as a text file, one formatted line per entry.
#[derive(Debug, Clone)]
pub struct FileScoreLog {
    path: PathBuf,
}

impl FileScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreLog for FileScoreLog {
    fn append(&mut self, entry: &ScoreEntry) -> Result<(), BlackjackGameError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }

    fn truncate(&mut self) -> Result<(), BlackjackGameError> {
        File::create(&self.path)?;
        log::info!("cleared score log {}", self.path.display());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<ScoreEntry>, BlackjackGameError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // nothing has been played yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ScoreEntry::from_str)
            .collect()
    }
}

/// Score log kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreLog {
    entries: Vec<ScoreEntry>,
}

impl MemoryScoreLog {
    pub fn new() -> Self {
        MemoryScoreLog { entries: vec![] }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ScoreEntry> {
        self.entries.last()
    }
}

impl ScoreLog for MemoryScoreLog {
    fn append(&mut self, entry: &ScoreEntry) -> Result<(), BlackjackGameError> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn truncate(&mut self) -> Result<(), BlackjackGameError> {
        self.entries.clear();
        Ok(())
    }

    fn entries(&self) -> Result<Vec<ScoreEntry>, BlackjackGameError> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, outcome: Outcome) -> ScoreEntry {
        ScoreEntry {
            timestamp: "2024-05-01 20:15:00".to_string(),
            player_name: name.to_string(),
            player_score: 20,
            dealer_score: 23,
            outcome,
            balance: 200,
        }
    }

    fn temp_log(name: &str) -> FileScoreLog {
        let path = std::env::temp_dir().join(format!(
            "blackjack_lib_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        FileScoreLog::new(path)
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            entry("alice", Outcome::Win).to_string(),
            "[2024-05-01 20:15:00] alice: 20 | Dealer: 23 -> Victory | Balance: 200 tokens"
        );
    }

    #[test]
    fn test_line_parses_back() {
        let original = entry("Mr: Smith", Outcome::Tie);
        let parsed: ScoreEntry = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_malformed_line() {
        assert!(matches!(
            "alice won".parse::<ScoreEntry>(),
            Err(BlackjackGameError::MalformedLogLine(_))
        ));
        assert!(
            "[t] alice: x | Dealer: 20 -> Victory | Balance: 5 tokens"
                .parse::<ScoreEntry>()
                .is_err()
        );
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), "2024-05-01 20:15:00".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }

    #[test]
    fn test_file_log_append_truncate() {
        let mut log = temp_log("append");
        assert!(log.entries().unwrap().is_empty());

        log.append(&entry("alice", Outcome::Win)).unwrap();
        log.append(&entry("bob", Outcome::Loss)).unwrap();
        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player_name, "alice");
        assert_eq!(entries[1].outcome, Outcome::Loss);

        log.truncate().unwrap();
        assert!(log.entries().unwrap().is_empty());
        let _ = fs::remove_file(log.path());
    }

    #[test]
    fn test_memory_log() {
        let mut log = MemoryScoreLog::new();
        log.append(&entry("alice", Outcome::Win)).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().map(|e| e.balance), Some(200));
        log.truncate().unwrap();
        assert!(log.is_empty());
    }
}
