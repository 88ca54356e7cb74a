//! The reconcile command: one full fetch → reconcile → persist → rescore
//! pass for an event.
//!
//! Fetches are concurrent but combined by source role, never arrival
//! order. A failed source degrades to "no data"; the pass continues with
//! whatever arrived. Result writes go in one atomic batch; the score phase
//! runs only when that batch changed something.

use crate::cli::types::EventId;
use crate::commands::{load_categories, load_nominees, load_results, rescore::run_rescore};
use crate::error::Result;
use crate::matching::CategoryIndex;
use crate::reconcile::planner::plan_result_writes;
use crate::reconcile::{reconcile_winners, Conflict};
use crate::sources::fetch::{fetch_client, fetch_document};
use crate::sources::{load_source_specs, parse_document, SourceRole, SourceSpec};
use crate::store::gateway::Gateway;
use crate::store::HttpStore;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Parameters for the reconcile command.
#[derive(Debug)]
pub struct ReconcileParams {
    pub event: EventId,
    pub sources: PathBuf,
    pub dry_run: bool,
    pub offline: bool,
    pub verbose: bool,
}

/// What one pass did, for reporting and for tests.
#[derive(Debug, Default)]
pub struct ReconcileSummary {
    pub result_ops: usize,
    pub score_ops: usize,
    pub conflicts: Vec<Conflict>,
}

/// The raw documents of one pass, keyed by source role.
#[derive(Debug, Default)]
pub struct SourceDocuments {
    pub official: Option<(SourceSpec, String)>,
    pub media: Option<(SourceSpec, String)>,
}

/// Handle the reconcile command.
pub async fn handle_reconcile(params: ReconcileParams) -> Result<()> {
    // Configuration problems surface before any fetch.
    let store = HttpStore::from_env()?;
    let year = params.event.year()?;
    let specs = load_source_specs(&params.sources)?;

    if params.offline {
        println!("Replaying sources from snapshots...");
    } else {
        println!("Fetching winner announcements...");
    }
    let docs = fetch_sources(&specs, year, params.offline).await?;

    let summary = run_reconcile(
        &store,
        &params.event,
        year,
        &docs,
        Utc::now(),
        params.dry_run,
        params.verbose,
    )
    .await?;

    if params.dry_run {
        println!(
            "✓ Dry run complete: {} result write(s) planned, scores untouched",
            summary.result_ops
        );
    } else {
        println!(
            "✓ Pass complete: {} result write(s), {} score write(s)",
            summary.result_ops, summary.score_ops
        );
    }
    Ok(())
}

/// Fetch the official and media documents concurrently. Role, not arrival
/// order, decides how each document is used downstream.
pub async fn fetch_sources(
    specs: &[SourceSpec],
    year: u16,
    offline: bool,
) -> Result<SourceDocuments> {
    let client = fetch_client()?;
    let official_spec = specs.iter().find(|s| s.role == SourceRole::Official).cloned();
    let media_spec = specs.iter().find(|s| s.role == SourceRole::Media).cloned();

    let (official, media) = tokio::join!(
        fetch_optional(&client, official_spec, year, offline),
        fetch_optional(&client, media_spec, year, offline),
    );
    Ok(SourceDocuments { official, media })
}

async fn fetch_optional(
    client: &reqwest::Client,
    spec: Option<SourceSpec>,
    year: u16,
    offline: bool,
) -> Option<(SourceSpec, String)> {
    let spec = spec?;
    match fetch_document(client, &spec, year, offline).await {
        Ok(doc) => Some((spec, doc)),
        Err(e) => {
            // A dead source degrades to "no data"; the pass carries on.
            eprintln!("⚠ Source '{}' unavailable: {}", spec.id, e);
            None
        }
    }
}

/// Run one reconciliation pass over already-fetched documents.
pub async fn run_reconcile<G: Gateway + Sync>(
    gw: &G,
    event: &EventId,
    year: u16,
    docs: &SourceDocuments,
    now: DateTime<Utc>,
    dry_run: bool,
    verbose: bool,
) -> Result<ReconcileSummary> {
    let categories = load_categories(gw, event).await?;
    let nominees = load_nominees(gw, &categories).await?;
    let index = CategoryIndex::new(&categories);

    let official_map = docs
        .official
        .as_ref()
        .map(|(spec, doc)| parse_document(doc, &spec.format, year, &index))
        .unwrap_or_default();
    let media_map = docs
        .media
        .as_ref()
        .map(|(spec, doc)| parse_document(doc, &spec.format, year, &index))
        .unwrap_or_default();

    if verbose {
        println!(
            "Parsed {} official and {} media winner line(s) across {} categories",
            official_map.len(),
            media_map.len(),
            categories.len()
        );
    }

    let outcome = reconcile_winners(&categories, &nominees, &official_map, &media_map);
    for conflict in &outcome.conflicts {
        eprintln!(
            "⚠ Sources disagree on '{}': official says '{}', media says '{}'",
            index
                .name_of(&conflict.category)
                .unwrap_or(conflict.category.as_str()),
            conflict.official,
            conflict.media
        );
    }

    let existing = load_results(gw, &categories).await?;
    let plan = plan_result_writes(&outcome.winners, &existing, now)?;
    for category in &plan.locked {
        eprintln!(
            "⚠ Keeping final determination for '{}' despite disagreeing evidence",
            index.name_of(category).unwrap_or(category.as_str())
        );
    }

    let result_ops = plan.ops.len();
    if dry_run {
        for op in &plan.ops {
            println!("  {}", op.describe());
        }
        return Ok(ReconcileSummary {
            result_ops,
            score_ops: 0,
            conflicts: outcome.conflicts,
        });
    }

    if result_ops > 0 {
        gw.transact(plan.ops).await?;
    }

    // Scores are recomputed only when a determination actually changed.
    let score_ops = if result_ops > 0 {
        run_rescore(gw, event, verbose).await?
    } else {
        if verbose {
            println!("No determination changes; scores left as-is");
        }
        0
    };

    Ok(ReconcileSummary {
        result_ops,
        score_ops,
        conflicts: outcome.conflicts,
    })
}
