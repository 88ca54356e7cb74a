//! Line-to-category matching.

use crate::cli::types::CategoryId;
use crate::matching::normalize;
use crate::store::records::CategoryRecord;


/// Ceremony-speak prefixes stripped off category names to derive short
/// aliases. Applied to the normalized name, longest first.
const ALIAS_PREFIXES: &[&str] = &[
    "outstanding performance by a ",
    "outstanding performance by an ",
    "outstanding ",
    "achievement in ",
    "best ",
];

struct CategoryEntry {
    id: CategoryId,
    name: String,
    /// Normalized alias set: the canonical name plus prefix-stripped variants.
    aliases: Vec<String>,
}

/// Matches free text lines against a fixed category set.
///
/// Categories keep their declaration order; the first category whose alias
/// set matches wins, regardless of how specific the match is. A match is
/// declared when the normalized line equals an alias or either string
/// contains the other. The policy is deliberately loose, favoring recall
/// over precision on noisy scraped text: short category names can
/// false-positive against longer lines, and that trade-off is intentional.
pub struct CategoryIndex {
    entries: Vec<CategoryEntry>,
}

impl CategoryIndex {
    pub fn new(categories: &[CategoryRecord]) -> Self {
        let entries = categories
            .iter()
            .map(|c| CategoryEntry {
                id: c.id.clone(),
                name: c.name.clone(),
                aliases: derive_aliases(&c.name),
            })
            .collect();
        Self { entries }
    }

    /// Find the first category matching `line`, in declaration order.
    pub fn match_line(&self, line: &str) -> Option<&CategoryId> {
        let norm = normalize(line);
        if norm.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| {
                e.aliases
                    .iter()
                    .any(|alias| norm == *alias || norm.contains(alias.as_str()) || alias.contains(&norm))
            })
            .map(|e| &e.id)
    }

    /// Display name for a category id, for log output.
    pub fn name_of(&self, id: &CategoryId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == *id)
            .map(|e| e.name.as_str())
    }
}

/// Normalized aliases for a category name: the full name, then the remainder
/// after each known prefix that applies. Empty remainders are dropped.
fn derive_aliases(name: &str) -> Vec<String> {
    let canonical = normalize(name);
    if canonical.is_empty() {
        return Vec::new();
    }
    let mut aliases = vec![canonical.clone()];
    for prefix in ALIAS_PREFIXES {
        if let Some(rest) = canonical.strip_prefix(prefix) {
            if !rest.is_empty() && !aliases.iter().any(|a| a == rest) {
                aliases.push(rest.to_string());
            }
        }
    }
    aliases
}
