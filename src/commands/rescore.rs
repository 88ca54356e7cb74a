//! The rescore command: full score recomputation for one event.
//!
//! Safe to run any number of times; unchanged totals produce no writes.

use crate::cli::types::{CategoryId, EventId, NomineeId};
use crate::commands::{load_categories, load_picks, load_results, load_scores};
use crate::error::Result;
use crate::scoring::{compute_totals, plan_score_writes};
use crate::store::gateway::Gateway;
use crate::store::HttpStore;
use std::collections::BTreeMap;

/// Handle the rescore command.
pub async fn handle_rescore(event: EventId, verbose: bool) -> Result<()> {
    let store = HttpStore::from_env()?;
    event.year()?;

    println!("Recomputing scores for {event}...");
    let writes = run_rescore(&store, &event, verbose).await?;
    println!("✓ Rescore complete ({writes} score write(s))");
    Ok(())
}

/// Recompute every (user, league) score for `event` from stored picks and
/// determinations, then apply the diff as one atomic batch. Returns the
/// number of writes applied.
pub async fn run_rescore<G: Gateway + Sync>(
    gw: &G,
    event: &EventId,
    verbose: bool,
) -> Result<usize> {
    let categories = load_categories(gw, event).await?;
    let results = load_results(gw, &categories).await?;
    // Provisional determinations count: they are the current truth until
    // superseded, and a later pass re-runs this recompute anyway.
    let winners: BTreeMap<CategoryId, NomineeId> = results
        .iter()
        .map(|r| (r.category.clone(), r.winner.clone()))
        .collect();

    let picks = load_picks(gw, &categories).await?;
    let existing = load_scores(gw, event).await?;

    let totals = compute_totals(&picks, &categories, &winners);
    if verbose {
        for ((user, league), t) in &totals {
            println!(
                "  {user} in {league}: {} pts, {} correct, {} power hit(s)",
                t.total_points, t.correct_picks, t.power_picks_hit
            );
        }
    }

    let ops = plan_score_writes(event, &totals, &existing)?;
    let writes = ops.len();
    if writes > 0 {
        gw.transact(ops).await?;
    }
    Ok(writes)
}
