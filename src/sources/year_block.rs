//! Year-scoped parser for pages that aggregate many ceremonies.
//!
//! A line equal to the target year opens the scope; any later bare 4-digit
//! line closes it (the next ceremony's block begins). Inside the scope the
//! marker rule applies, except that candidate winner lines equal to the
//! literal token "nominee" are skipped, since these pages interleave winner
//! and nominee rows under the same labels.

use crate::cli::types::CategoryId;
use crate::matching::CategoryIndex;
use std::collections::BTreeMap;


const NOMINEE_TOKEN: &str = "nominee";

pub fn parse(
    lines: &[String],
    marker: &str,
    year: u16,
    index: &CategoryIndex,
) -> BTreeMap<CategoryId, String> {
    let target = year.to_string();
    let mut winners = BTreeMap::new();
    let mut in_scope = false;
    let mut current: Option<CategoryId> = None;
    let mut awaiting_winner = false;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !in_scope {
            if line == target {
                in_scope = true;
            }
            continue;
        }

        if is_year_line(line) {
            // Another ceremony's block begins; the cursor does not leak
            // across scopes. The target year itself re-opens the scope.
            in_scope = line == target;
            current = None;
            awaiting_winner = false;
            continue;
        }

        if awaiting_winner {
            if line.eq_ignore_ascii_case(NOMINEE_TOKEN) {
                continue;
            }
            awaiting_winner = false;
            if let Some(category) = current.clone() {
                winners.entry(category).or_insert_with(|| line.to_string());
            }
            continue;
        }

        if line.eq_ignore_ascii_case(marker) {
            awaiting_winner = current.is_some();
            continue;
        }

        if let Some(category) = index.match_line(line) {
            current = Some(category.clone());
        }
    }

    winners
}

fn is_year_line(line: &str) -> bool {
    line.len() == 4 && line.chars().all(|c| c.is_ascii_digit())
}
