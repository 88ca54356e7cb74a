//! Marker-style parser: category label, marker line, winner line.

use crate::cli::types::CategoryId;
use crate::matching::CategoryIndex;
use std::collections::BTreeMap;


#[derive(Default)]
struct Cursor {
    current: Option<CategoryId>,
    awaiting_winner: bool,
}

/// Walk the line sequence: a category-matching line moves the cursor; a
/// line equal to `marker` (case-insensitive) arms the cursor; the next
/// non-empty line is recorded as the raw winner for the current category.
/// The first recorded winner per category wins; repeats are ignored.
pub fn parse(
    lines: &[String],
    marker: &str,
    index: &CategoryIndex,
) -> BTreeMap<CategoryId, String> {
    let mut winners = BTreeMap::new();
    let mut cursor = Cursor::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if cursor.awaiting_winner {
            cursor.awaiting_winner = false;
            if let Some(category) = cursor.current.clone() {
                winners.entry(category).or_insert_with(|| line.to_string());
            }
            continue;
        }

        if line.eq_ignore_ascii_case(marker) {
            // A marker with no category context is ignored.
            cursor.awaiting_winner = cursor.current.is_some();
            continue;
        }

        if let Some(category) = index.match_line(line) {
            cursor.current = Some(category.clone());
        }
    }

    winners
}
