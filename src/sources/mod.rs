//! Scrape-source definitions and the per-format document parsers.
//!
//! A source is a URL plus a role (official or media) and one of three text
//! shapes. Every parser walks the extracted line sequence with explicit
//! local cursor state and produces a category → raw-winner-string map.
//! Missing categories are normal output, never errors.

pub mod fetch;
pub mod marker;
pub mod prefix;
pub mod year_block;

use crate::cli::types::CategoryId;
use crate::error::Result;
use crate::matching::{extract_lines, CategoryIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// How much trust a source carries in reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRole {
    /// The ceremony's own announcement page; authoritative.
    Official,
    /// An independent press page; used to cross-check, alone it only
    /// yields provisional determinations.
    Media,
}

/// The text shape a source publishes winners in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum SourceFormat {
    /// Category label, then a marker line (e.g. "Winner"), then the winner
    /// on the following line.
    Marker { marker: String },
    /// Category label, then a line starting with a prefix token (e.g.
    /// "Recipient:") carrying the winner on the same line.
    Prefix { prefix: String },
    /// One page aggregating multiple years; the marker rule applies only
    /// inside the target year's block.
    YearBlock { marker: String },
}

/// One scrape-source definition, as supplied by the caller's JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Short slug used in log lines and snapshot file names.
    pub id: String,
    pub role: SourceRole,
    pub url: String,
    #[serde(flatten)]
    pub format: SourceFormat,
}

/// Deserialize the scrape-source definition file. Validation beyond the
/// shape of the JSON belongs to whoever maintains the file.
pub fn load_source_specs(path: &Path) -> Result<Vec<SourceSpec>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Run the parser matching `format` over a raw document.
pub fn parse_document(
    doc: &str,
    format: &SourceFormat,
    year: u16,
    index: &CategoryIndex,
) -> BTreeMap<CategoryId, String> {
    let lines = extract_lines(doc);
    match format {
        SourceFormat::Marker { marker } => marker::parse(&lines, marker, index),
        SourceFormat::Prefix { prefix } => prefix::parse(&lines, prefix, index),
        SourceFormat::YearBlock { marker } => year_block::parse(&lines, marker, year, index),
    }
}
