//! Score recalculation engine.
//!
//! Always a full recompute from picks and current determinations, never a
//! delta apply: the same inputs produce the same totals no matter how many
//! times the engine runs, and stale rows are zeroed rather than deleted.
//! This module is the only writer of the scores collection.

use crate::cli::types::{CategoryId, EventId, LeagueId, NomineeId, UserId};
use crate::error::Result;
use crate::store::gateway::{collections, WriteOp};
use crate::store::records::{CategoryRecord, NewScore, PickRecord, ScoreRecord, DEFAULT_BASE_POINTS};
use serde_json::json;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Correct power picks score triple.
pub const POWER_PICK_MULTIPLIER: i64 = 3;

/// Accumulated totals for one (user, league) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTotals {
    pub total_points: i64,
    pub correct_picks: i64,
    pub power_picks_hit: i64,
}

impl ScoreTotals {
    fn is_zero(&self) -> bool {
        *self == ScoreTotals::default()
    }
}

impl ScoreRecord {
    fn totals(&self) -> ScoreTotals {
        ScoreTotals {
            total_points: self.total_points,
            correct_picks: self.correct_picks,
            power_picks_hit: self.power_picks_hit,
        }
    }
}

/// Recompute per-(user, league) totals from scratch.
///
/// A pick is correct iff its nominee is the category's current winner;
/// categories without a determination contribute nothing. Only pairs with
/// at least one correct pick appear in the output; everyone else is
/// handled by the zeroing diff in [`plan_score_writes`]. Picks without an
/// expanded ballot cannot be attributed to anyone and are skipped.
pub fn compute_totals(
    picks: &[PickRecord],
    categories: &[CategoryRecord],
    winners: &BTreeMap<CategoryId, NomineeId>,
) -> BTreeMap<(UserId, LeagueId), ScoreTotals> {
    let points_by_category: BTreeMap<&CategoryId, i64> = categories
        .iter()
        .map(|c| (&c.id, c.base_points_or_default()))
        .collect();

    let mut totals: BTreeMap<(UserId, LeagueId), ScoreTotals> = BTreeMap::new();
    for pick in picks {
        let Some(ballot) = pick.expand.as_ref().map(|e| &e.ballot) else {
            continue;
        };
        let Some(winner) = winners.get(&pick.category) else {
            continue;
        };
        if *winner != pick.nominee {
            continue;
        }

        let base = points_by_category
            .get(&pick.category)
            .copied()
            .unwrap_or(DEFAULT_BASE_POINTS);
        let entry = totals
            .entry((ballot.user.clone(), ballot.league.clone()))
            .or_default();
        entry.correct_picks += 1;
        if pick.is_power_pick {
            entry.total_points += base * POWER_PICK_MULTIPLIER;
            entry.power_picks_hit += 1;
        } else {
            entry.total_points += base;
        }
    }
    totals
}

/// Diff computed totals against stored score rows.
///
/// - pair with totals, no row → create
/// - pair with totals, row differs → update
/// - pair with totals, row matches → no write
/// - row whose pair has no totals this pass → zeroed in place, unless it
///   already is; rows are never deleted
pub fn plan_score_writes(
    event: &EventId,
    totals: &BTreeMap<(UserId, LeagueId), ScoreTotals>,
    existing: &[ScoreRecord],
) -> Result<Vec<WriteOp>> {
    let stored_by_key: BTreeMap<(UserId, LeagueId), &ScoreRecord> = existing
        .iter()
        .map(|s| ((s.user.clone(), s.league.clone()), s))
        .collect();

    let mut ops = Vec::new();
    for (key, computed) in totals {
        match stored_by_key.get(key).copied() {
            Some(row) if row.totals() == *computed => {}
            Some(row) => ops.push(totals_update(row, computed)),
            None => {
                let (user, league) = key;
                let data = serde_json::to_value(NewScore {
                    event: event.clone(),
                    user: user.clone(),
                    league: league.clone(),
                    total_points: computed.total_points,
                    correct_picks: computed.correct_picks,
                    power_picks_hit: computed.power_picks_hit,
                })?;
                ops.push(WriteOp::Create {
                    collection: collections::SCORES,
                    data,
                });
            }
        }
    }

    // Zeroing invariant: rows for pairs that earned nothing this pass are
    // reset in place, so the stored state always reflects the latest truth.
    let zero = ScoreTotals::default();
    for (key, &row) in &stored_by_key {
        if !totals.contains_key(key) && !row.totals().is_zero() {
            ops.push(totals_update(row, &zero));
        }
    }

    Ok(ops)
}

fn totals_update(row: &ScoreRecord, totals: &ScoreTotals) -> WriteOp {
    WriteOp::Update {
        collection: collections::SCORES,
        id: row.id.clone(),
        data: json!({
            "total_points": totals.total_points,
            "correct_picks": totals.correct_picks,
            "power_picks_hit": totals.power_picks_hit,
        }),
    }
}
