//! Three-way diff between reconciled winners and stored determinations.
//!
//! The planner is pure: it never talks to the store, it only turns the
//! reconciliation outcome into the minimal ordered write batch. Running it
//! again over the state it produced yields an empty batch.

use crate::cli::types::CategoryId;
use crate::error::Result;
use crate::reconcile::ReconciledWinner;
use crate::store::gateway::{collections, WriteOp};
use crate::store::records::{NewResult, ResultRecord};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeMap;


/// The planned result writes, plus the categories whose stored-final
/// determination disagreed with this pass's evidence (reported for
/// logging; never written).
#[derive(Debug, Default)]
pub struct ResultPlan {
    pub ops: Vec<WriteOp>,
    pub locked: Vec<CategoryId>,
}

/// Diff reconciled winners against stored determinations.
///
/// - no stored record → create, stamped with `announced_at`
/// - stored provisional, new final → update (finalize, re-point if needed)
/// - stored provisional, new provisional with a different nominee → update
/// - stored provisional, same provisional nominee → no write
/// - stored final → never written; a disagreeing pass lands in `locked`
pub fn plan_result_writes(
    winners: &BTreeMap<CategoryId, ReconciledWinner>,
    existing: &[ResultRecord],
    announced_at: DateTime<Utc>,
) -> Result<ResultPlan> {
    let stored_by_category: BTreeMap<&CategoryId, &ResultRecord> =
        existing.iter().map(|r| (&r.category, r)).collect();

    let mut plan = ResultPlan::default();
    for (category, winner) in winners {
        match stored_by_category.get(category) {
            None => {
                let data = serde_json::to_value(NewResult {
                    category: category.clone(),
                    winner: winner.nominee.clone(),
                    announced_at,
                    is_provisional: winner.is_provisional,
                })?;
                plan.ops.push(WriteOp::Create {
                    collection: collections::RESULTS,
                    data,
                });
            }
            Some(stored) if stored.is_provisional => {
                let finalizes = !winner.is_provisional;
                let repoints = stored.winner != winner.nominee;
                if finalizes || repoints {
                    plan.ops.push(WriteOp::Update {
                        collection: collections::RESULTS,
                        id: stored.id.clone(),
                        data: json!({
                            "winner": winner.nominee,
                            "is_provisional": winner.is_provisional,
                        }),
                    });
                }
            }
            Some(stored) => {
                // Final determinations are immutable.
                if stored.winner != winner.nominee {
                    plan.locked.push(category.clone());
                }
            }
        }
    }
    Ok(plan)
}
