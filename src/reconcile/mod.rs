//! Cross-source winner reconciliation.
//!
//! Takes the official and media winner-name maps for one event and decides,
//! per category, whether there is an accepted winner and how confident the
//! evidence is. Disagreements are skipped outright (accuracy over speed);
//! the caller re-runs the pass until sources converge.

pub mod planner;

use crate::cli::types::{CategoryId, NomineeId};
use crate::matching::{match_nominee, normalize};
use crate::store::records::{CategoryRecord, NomineeRecord};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// An accepted winner for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledWinner {
    pub nominee: NomineeId,
    /// True when only the media source vouched for it.
    pub is_provisional: bool,
}

/// A category where both sources reported winners that could not be
/// reconciled. Nothing is written for it this pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub category: CategoryId,
    pub official: String,
    pub media: String,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Default)]
pub struct Reconciliation {
    pub winners: BTreeMap<CategoryId, ReconciledWinner>,
    pub conflicts: Vec<Conflict>,
}

/// Merge the two winner-name maps per the agreement policy.
///
/// Per category, in declaration order:
/// 1. both sources agree (normalized equality or containment) → the
///    official string is resolved against the nominee list; final
/// 2. both report, no agreement → conflict, skipped
/// 3. official only → resolved, final (the official source alone is
///    authoritative; media is the cross-check, not a prerequisite)
/// 4. media only → resolved, provisional
/// A winner string that resolves to no nominee is skipped this cycle.
pub fn reconcile_winners(
    categories: &[CategoryRecord],
    nominees_by_category: &BTreeMap<CategoryId, Vec<NomineeRecord>>,
    official: &BTreeMap<CategoryId, String>,
    media: &BTreeMap<CategoryId, String>,
) -> Reconciliation {
    let mut outcome = Reconciliation::default();

    for category in categories {
        let nominees = match nominees_by_category.get(&category.id) {
            Some(n) => n.as_slice(),
            None => continue,
        };

        let accepted = match (official.get(&category.id), media.get(&category.id)) {
            (Some(off), Some(med)) if strings_agree(off, med) => Some((off.as_str(), false)),
            (Some(off), Some(med)) => {
                outcome.conflicts.push(Conflict {
                    category: category.id.clone(),
                    official: off.clone(),
                    media: med.clone(),
                });
                None
            }
            (Some(off), None) => Some((off.as_str(), false)),
            (None, Some(med)) => Some((med.as_str(), true)),
            (None, None) => None,
        };

        if let Some((raw, is_provisional)) = accepted {
            if let Some(nominee) = match_nominee(raw, nominees) {
                outcome.winners.insert(
                    category.id.clone(),
                    ReconciledWinner {
                        nominee: nominee.id.clone(),
                        is_provisional,
                    },
                );
            }
        }
    }

    outcome
}

/// Two raw winner strings agree when their normalized forms are equal or
/// one contains the other.
fn strings_agree(a: &str, b: &str) -> bool {
    let na = normalize(a);
    let nb = normalize(b);
    !na.is_empty() && !nb.is_empty() && (na == nb || na.contains(&nb) || nb.contains(&na))
}
