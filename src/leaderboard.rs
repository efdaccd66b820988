//! Local score leaderboard
//!
//! Append-only log of finished games, persisted as a single JSON array in
//! LocalStorage, plus derived views (best stats, top-N rankings). Stored
//! data is untrusted: anything malformed is dropped on read, never repaired.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::platform::storage::StringStore;

/// Display name used when a score is saved without a nickname
pub const DEFAULT_NICKNAME: &str = "Local Player";

/// Number of entries a top-N view returns unless asked otherwise
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Default nickname for scores saved without one
pub fn default_nickname() -> &'static str {
    DEFAULT_NICKNAME
}

/// Game difficulty tier
///
/// Each tier is an independent ranking pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One finished game attempt
///
/// Serializes with camelCase field names and lowercase difficulty values,
/// the JSON shape the page stores under the versioned key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Player's display name
    pub nickname: String,
    /// Card flips taken to clear the board
    pub flip_count: u32,
    /// Seconds taken to clear the board
    pub elapsed_time: f64,
    /// Unix timestamp (ms) assigned by the caller at save time; tie-break key
    pub created_at: f64,
    /// Tier the game was played on
    pub difficulty: Difficulty,
}

impl ScoreRecord {
    /// Validate one stored entry
    ///
    /// The entry is kept only if every field has the expected shape: textual
    /// nickname, non-negative integer flip count, numeric elapsed time and
    /// timestamp, difficulty either "easy", "hard", or absent. Anything else
    /// drops this entry and leaves its siblings alone.
    fn from_stored(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let nickname = entry.get("nickname")?.as_str()?;
        let flip_count = u32::try_from(entry.get("flipCount")?.as_u64()?).ok()?;
        let elapsed_time = entry.get("elapsedTime")?.as_f64()?;
        let created_at = entry.get("createdAt")?.as_f64()?;
        // Absent coerces to easy; any present value other than the two
        // known tiers fails validation
        let difficulty = match entry.get("difficulty") {
            None => Difficulty::Easy,
            Some(Value::String(s)) if s == "hard" => Difficulty::Hard,
            Some(Value::String(s)) if s == "easy" => Difficulty::Easy,
            Some(_) => return None,
        };

        Some(Self {
            nickname: if nickname.is_empty() {
                DEFAULT_NICKNAME.to_string()
            } else {
                nickname.to_string()
            },
            flip_count,
            elapsed_time,
            created_at,
            difficulty,
        })
    }
}

/// Input to [`Leaderboard::save_score`]: a finished game, nickname optional
#[derive(Debug, Clone)]
pub struct ScoreSubmission {
    pub nickname: Option<String>,
    pub flip_count: u32,
    pub elapsed_time: f64,
    pub created_at: f64,
    pub difficulty: Difficulty,
}

impl ScoreSubmission {
    fn into_record(self) -> ScoreRecord {
        ScoreRecord {
            nickname: self
                .nickname
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            flip_count: self.flip_count,
            elapsed_time: self.elapsed_time,
            created_at: self.created_at,
            difficulty: self.difficulty,
        }
    }
}

/// Best (lowest) stats across a set of scores
///
/// The two minima are taken independently and may come from two different
/// games. `{0, 0}` means "no data", not an achieved score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BestStats {
    pub best_flip_count: u32,
    pub best_elapsed_time: f64,
}

/// Local leaderboard over an optional key-value store
///
/// Absent storage (no LocalStorage capability in the current context) is the
/// no-op mode: reads come back empty, writes do nothing.
#[derive(Debug)]
pub struct Leaderboard<S> {
    storage: Option<S>,
}

impl<S: StringStore> Leaderboard<S> {
    /// Storage key; versioned so a shape change means a new key, not a
    /// migration of old data
    pub const STORAGE_KEY: &'static str = "pick-a-nimal:scores:v1";

    /// Leaderboard over the given store
    pub fn new(storage: S) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// No-op leaderboard for contexts without a storage capability
    pub fn detached() -> Self {
        Self { storage: None }
    }

    /// Read every stored score, dropping whatever fails validation
    ///
    /// Missing storage, a missing key, unparseable JSON, and a non-array
    /// payload all read as an empty collection. Never returns an error.
    pub fn read_scores(&self) -> Vec<ScoreRecord> {
        let Some(storage) = &self.storage else {
            return Vec::new();
        };
        let Some(raw) = storage.get(Self::STORAGE_KEY) else {
            log::debug!("No stored scores, starting fresh");
            return Vec::new();
        };
        let Ok(parsed) = serde_json::from_str::<Value>(&raw) else {
            log::warn!("Stored scores are not valid JSON, treating as empty");
            return Vec::new();
        };
        let Some(entries) = parsed.as_array() else {
            log::warn!("Stored scores are not an array, treating as empty");
            return Vec::new();
        };

        let scores: Vec<ScoreRecord> =
            entries.iter().filter_map(ScoreRecord::from_stored).collect();
        let dropped = entries.len() - scores.len();
        if dropped > 0 {
            log::warn!("Dropped {} malformed score entries", dropped);
        }
        scores
    }

    /// Serialize and store the full collection in one write
    fn write_scores(&self, scores: &[ScoreRecord]) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Ok(json) = serde_json::to_string(scores) {
            storage.set(Self::STORAGE_KEY, &json);
            log::info!("Scores saved ({} entries)", scores.len());
        }
    }

    /// Append one finished game to the stored collection
    ///
    /// Read-modify-write over the whole collection; not atomic against a
    /// second tab saving at the same moment (last write wins, known
    /// limitation). No-op without a storage capability.
    pub fn save_score(&self, submission: ScoreSubmission) {
        let mut scores = self.read_scores();
        scores.push(submission.into_record());
        self.write_scores(&scores);
    }

    /// Lowest flip count and lowest elapsed time, taken independently
    ///
    /// Filters to `difficulty` when given. An empty (or filtered-to-empty)
    /// collection yields the `{0, 0}` no-data sentinel.
    pub fn best_stats(&self, difficulty: Option<Difficulty>) -> BestStats {
        let scores = filter_by_difficulty(self.read_scores(), difficulty);
        if scores.is_empty() {
            return BestStats::default();
        }
        BestStats {
            best_flip_count: scores.iter().map(|s| s.flip_count).min().unwrap_or(0),
            best_elapsed_time: scores
                .iter()
                .map(|s| s.elapsed_time)
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Fastest games first; ties rank the earlier submission higher
    pub fn top_by_elapsed_time(
        &self,
        limit: usize,
        difficulty: Option<Difficulty>,
    ) -> Vec<ScoreRecord> {
        let mut scores = filter_by_difficulty(self.read_scores(), difficulty);
        scores.sort_by(|a, b| {
            a.elapsed_time
                .total_cmp(&b.elapsed_time)
                .then(a.created_at.total_cmp(&b.created_at))
        });
        scores.truncate(limit);
        scores
    }

    /// Fewest flips first; ties rank the earlier submission higher
    pub fn top_by_flip_count(
        &self,
        limit: usize,
        difficulty: Option<Difficulty>,
    ) -> Vec<ScoreRecord> {
        let mut scores = filter_by_difficulty(self.read_scores(), difficulty);
        scores.sort_by(|a, b| {
            a.flip_count
                .cmp(&b.flip_count)
                .then(a.created_at.total_cmp(&b.created_at))
        });
        scores.truncate(limit);
        scores
    }
}

fn filter_by_difficulty(
    scores: Vec<ScoreRecord>,
    difficulty: Option<Difficulty>,
) -> Vec<ScoreRecord> {
    match difficulty {
        None => scores,
        Some(d) => scores.into_iter().filter(|s| s.difficulty == d).collect(),
    }
}
