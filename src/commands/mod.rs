//! Pass orchestration for the awards-pool CLI.

pub mod reconcile;
pub mod rescore;

use crate::cli::types::{CategoryId, EventId};
use crate::error::Result;
use crate::store::gateway::{collections, query_as, Gateway, RecordQuery};
use crate::store::records::{CategoryRecord, NomineeRecord, PickRecord, ResultRecord, ScoreRecord};
use std::collections::BTreeMap;

/// Event categories in declaration (seeding) order.
pub async fn load_categories<G: Gateway + Sync>(
    gw: &G,
    event: &EventId,
) -> Result<Vec<CategoryRecord>> {
    query_as(
        gw,
        collections::CATEGORIES,
        RecordQuery::new().eq("event", event.as_str()),
    )
    .await
}

/// Nominee lists per category, preserving the store's list order within
/// each category.
pub async fn load_nominees<G: Gateway + Sync>(
    gw: &G,
    categories: &[CategoryRecord],
) -> Result<BTreeMap<CategoryId, Vec<NomineeRecord>>> {
    if categories.is_empty() {
        return Ok(BTreeMap::new());
    }
    let nominees: Vec<NomineeRecord> = query_as(
        gw,
        collections::NOMINEES,
        RecordQuery::new().any_of("category", category_ids(categories)),
    )
    .await?;

    let mut grouped: BTreeMap<CategoryId, Vec<NomineeRecord>> = BTreeMap::new();
    for nominee in nominees {
        grouped
            .entry(nominee.category.clone())
            .or_default()
            .push(nominee);
    }
    Ok(grouped)
}

/// Current winner determinations for the event's categories.
pub async fn load_results<G: Gateway + Sync>(
    gw: &G,
    categories: &[CategoryRecord],
) -> Result<Vec<ResultRecord>> {
    if categories.is_empty() {
        return Ok(Vec::new());
    }
    query_as(
        gw,
        collections::RESULTS,
        RecordQuery::new().any_of("category", category_ids(categories)),
    )
    .await
}

/// All picks touching the event's categories, with their ballots expanded
/// so scoring can attribute them to a (user, league) pair.
pub async fn load_picks<G: Gateway + Sync>(
    gw: &G,
    categories: &[CategoryRecord],
) -> Result<Vec<PickRecord>> {
    if categories.is_empty() {
        return Ok(Vec::new());
    }
    query_as(
        gw,
        collections::PICKS,
        RecordQuery::new()
            .any_of("category", category_ids(categories))
            .expand("ballot"),
    )
    .await
}

/// Stored score rows for the event.
pub async fn load_scores<G: Gateway + Sync>(
    gw: &G,
    event: &EventId,
) -> Result<Vec<ScoreRecord>> {
    query_as(
        gw,
        collections::SCORES,
        RecordQuery::new().eq("event", event.as_str()),
    )
    .await
}

fn category_ids(categories: &[CategoryRecord]) -> Vec<String> {
    categories.iter().map(|c| c.id.0.clone()).collect()
}
