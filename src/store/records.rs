//! Typed views of the document-store collections.
//!
//! Ids are store-assigned opaque strings. The store maintains its own
//! created/updated timestamps on every record; only domain fields appear
//! here.

use crate::cli::types::{CategoryId, EventId, LeagueId, NomineeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points awarded for a correct pick when the category does not configure
/// its own value.
pub const DEFAULT_BASE_POINTS: i64 = 50;

/// One award category within an event. Seeded externally, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub event: EventId,
    pub name: String,
    #[serde(default)]
    pub base_points: Option<i64>,
}

impl CategoryRecord {
    /// Configured base points, falling back to [`DEFAULT_BASE_POINTS`].
    /// The store reports unset number fields as 0, so 0 also falls back.
    pub fn base_points_or_default(&self) -> i64 {
        match self.base_points {
            Some(p) if p > 0 => p,
            _ => DEFAULT_BASE_POINTS,
        }
    }
}

/// One candidate within a category. Seeded externally, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NomineeRecord {
    pub id: NomineeId,
    pub category: CategoryId,
    pub name: String,
}

/// A winner determination for one category. At most one live record per
/// category; created on first evidence, finalized or re-pointed in place,
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub category: CategoryId,
    pub winner: NomineeId,
    pub announced_at: DateTime<Utc>,
    pub is_provisional: bool,
}

/// Payload for creating a new winner determination.
#[derive(Debug, Clone, Serialize)]
pub struct NewResult {
    pub category: CategoryId,
    pub winner: NomineeId,
    pub announced_at: DateTime<Utc>,
    pub is_provisional: bool,
}

/// One user's ballot in one league for one event. External input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallotRecord {
    pub id: String,
    pub event: EventId,
    pub user: UserId,
    pub league: LeagueId,
}

/// One chosen nominee for one category. Immutable input to scoring; the
/// owning ballot arrives through relation expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRecord {
    pub id: String,
    pub ballot: String,
    pub category: CategoryId,
    pub nominee: NomineeId,
    #[serde(default)]
    pub is_power_pick: bool,
    #[serde(default)]
    pub expand: Option<PickExpand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickExpand {
    pub ballot: BallotRecord,
}

/// Derived per-(user, league) totals for one event. Owned exclusively by
/// the score recalculation engine; zeroed rather than deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: String,
    pub event: EventId,
    pub user: UserId,
    pub league: LeagueId,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub correct_picks: i64,
    #[serde(default)]
    pub power_picks_hit: i64,
}

/// Payload for creating a new score row.
#[derive(Debug, Clone, Serialize)]
pub struct NewScore {
    pub event: EventId,
    pub user: UserId,
    pub league: LeagueId,
    pub total_points: i64,
    pub correct_picks: i64,
    pub power_picks_hit: i64,
}
