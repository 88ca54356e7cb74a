//! Prefix-style parser: category label, then a "Recipient: ..." line.

use crate::cli::types::CategoryId;
use crate::matching::CategoryIndex;
use std::collections::BTreeMap;

/// Walk the line sequence: a category-matching line moves the cursor; a
/// line starting with `prefix` (case-insensitive) yields the winner as the
/// remainder of that line, with any separator punctuation trimmed. First
/// recorded winner per category wins.
pub fn parse(
    lines: &[String],
    prefix: &str,
    index: &CategoryIndex,
) -> BTreeMap<CategoryId, String> {
    let mut winners = BTreeMap::new();
    let mut current: Option<CategoryId> = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(category) = current.clone() {
            if let Some(rest) = strip_prefix_ci(line, prefix) {
                let name = rest.trim_start().trim_start_matches([':', '-']).trim();
                if !name.is_empty() {
                    winners.entry(category).or_insert_with(|| name.to_string());
                }
                continue;
            }
        }

        if let Some(category) = index.match_line(line) {
            current = Some(category.clone());
        }
    }

    winners
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        line.get(prefix.len()..)
    } else {
        None
    }
}
