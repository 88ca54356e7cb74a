//! Free-text winner string to nominee resolution.

use crate::matching::normalize;
use crate::store::records::NomineeRecord;

/// Resolve a raw winner string against one category's nominee list.
///
/// Returns the first nominee (in list order) whose normalized name is a
/// substring of the normalized input, or vice versa. Containment rather
/// than edit distance: "Oppenheimer (dir. Nolan)" resolves to the nominee
/// "Oppenheimer". Ambiguous short names can mis-resolve; callers accept
/// that in exchange for tolerance of scraped noise.
pub fn match_nominee<'a>(raw: &str, nominees: &'a [NomineeRecord]) -> Option<&'a NomineeRecord> {
    let norm = normalize(raw);
    if norm.is_empty() {
        return None;
    }
    nominees.iter().find(|n| {
        let name = normalize(&n.name);
        !name.is_empty() && (norm.contains(&name) || name.contains(&norm))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{CategoryId, NomineeId};

    fn nominee(id: &str, name: &str) -> NomineeRecord {
        NomineeRecord {
            id: NomineeId::new(id),
            category: CategoryId::new("c1"),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_exact_name() {
        let list = vec![nominee("n1", "Oppenheimer"), nominee("n2", "Barbie")];
        assert_eq!(match_nominee("Oppenheimer", &list).unwrap().id.as_str(), "n1");
    }

    #[test]
    fn test_input_contains_nominee() {
        let list = vec![nominee("n1", "Oppenheimer")];
        assert_eq!(
            match_nominee("Oppenheimer (dir. Nolan)", &list).unwrap().id.as_str(),
            "n1"
        );
    }

    #[test]
    fn test_nominee_contains_input() {
        let list = vec![nominee("n1", "Lily Gladstone — Killers of the Flower Moon")];
        assert_eq!(
            match_nominee("Lily Gladstone", &list).unwrap().id.as_str(),
            "n1"
        );
    }

    #[test]
    fn test_first_in_list_order_wins() {
        let list = vec![nominee("n1", "Maestro"), nominee("n2", "Maestro: The Sequel")];
        assert_eq!(match_nominee("Maestro", &list).unwrap().id.as_str(), "n1");
    }

    #[test]
    fn test_no_match() {
        let list = vec![nominee("n1", "Oppenheimer")];
        assert!(match_nominee("Poor Things", &list).is_none());
    }

    #[test]
    fn test_empty_input_never_matches() {
        let list = vec![nominee("n1", "Oppenheimer")];
        assert!(match_nominee("", &list).is_none());
        assert!(match_nominee("???", &list).is_none());
    }
}
