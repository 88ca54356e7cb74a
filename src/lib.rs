//! Awards Pool Results Engine
//!
//! Library behind the `awards-pool` CLI: fetches winner announcements for an
//! awards ceremony from untrusted text sources, cross-validates them, and
//! keeps every contest participant's score in sync with the latest
//! determinations.
//!
//! ## Features
//!
//! - **Multi-Source Extraction**: three tolerant line-walking parsers for the
//!   common winner-page shapes (marker, prefix, year-scoped)
//! - **Cross-Validation**: official and media sources must agree before a
//!   winner is final; media alone yields a provisional determination
//! - **Fuzzy Matching**: normalization plus containment matching for noisy
//!   category labels and winner names
//! - **Idempotent Scoring**: full recompute of every (user, league) total,
//!   with stale rows zeroed in place
//! - **Atomic Persistence**: all writes per phase go to the document store
//!   as one batch
//! - **Offline Replay**: fetched documents are snapshotted and can be
//!   replayed with `--offline`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use awards_pool::{cli::types::EventId, commands::reconcile::*};
//!
//! # async fn example() -> awards_pool::Result<()> {
//! let params = ReconcileParams {
//!     event: EventId::new("sag-2024"),
//!     sources: "sources.json".into(),
//!     dry_run: false,
//!     offline: false,
//!     verbose: false,
//! };
//!
//! handle_reconcile(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the engine at the document store:
//! ```bash
//! export AWARDS_POOL_STORE_URL=https://store.example.com
//! export AWARDS_POOL_STORE_TOKEN=...
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod matching;
pub mod reconcile;
pub mod scoring;
pub mod sources;
pub mod store;

// Re-export commonly used types
pub use cli::types::{CategoryId, EventId, LeagueId, NomineeId, UserId};
pub use error::{PoolError, Result};
pub use store::{Gateway, HttpStore, MemoryStore};

pub const STORE_URL_ENV_VAR: &str = "AWARDS_POOL_STORE_URL";
pub const STORE_TOKEN_ENV_VAR: &str = "AWARDS_POOL_STORE_TOKEN";
