//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::EventId;

/// Top-level CLI for the awards-pool results engine.
#[derive(Debug, Parser)]
#[clap(
    name = "awards-pool",
    about = "Live awards-results reconciliation and contest scoring"
)]
pub struct AwardsPool {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch winner announcements, reconcile them, persist determinations,
    /// and rescore every affected participant.
    Reconcile {
        /// Event id, e.g. `sag-2024` (the year is the trailing 4 digits).
        #[clap(long, short)]
        event: EventId,

        /// Path to the scrape-source definition file (JSON).
        #[clap(long, short)]
        sources: PathBuf,

        /// Plan writes and print them without applying anything.
        #[clap(long)]
        dry_run: bool,

        /// Replay from on-disk snapshots instead of fetching the sources.
        #[clap(long)]
        offline: bool,

        /// Show per-category detail while reconciling.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Recompute all scores for an event from stored picks and results.
    Rescore {
        /// Event id, e.g. `sag-2024`.
        #[clap(long, short)]
        event: EventId,

        /// Show per-user detail while rescoring.
        #[clap(long, short)]
        verbose: bool,
    },
}
