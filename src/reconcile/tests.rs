use super::*;
use crate::cli::types::EventId;

fn category(id: &str, name: &str) -> CategoryRecord {
    CategoryRecord {
        id: CategoryId::new(id),
        event: EventId::new("oscars-2024"),
        name: name.to_string(),
        base_points: None,
    }
}

fn nominee(id: &str, category: &str, name: &str) -> NomineeRecord {
    NomineeRecord {
        id: NomineeId::new(id),
        category: CategoryId::new(category),
        name: name.to_string(),
    }
}

fn fixture() -> (Vec<CategoryRecord>, BTreeMap<CategoryId, Vec<NomineeRecord>>) {
    let categories = vec![category("c1", "Best Picture"), category("c2", "Best Director")];
    let mut nominees = BTreeMap::new();
    nominees.insert(
        CategoryId::new("c1"),
        vec![
            nominee("n1", "c1", "Oppenheimer"),
            nominee("n2", "c1", "Barbie"),
        ],
    );
    nominees.insert(
        CategoryId::new("c2"),
        vec![
            nominee("n3", "c2", "Christopher Nolan"),
            nominee("n4", "c2", "Greta Gerwig"),
        ],
    );
    (categories, nominees)
}

fn names(pairs: &[(&str, &str)]) -> BTreeMap<CategoryId, String> {
    pairs
        .iter()
        .map(|(c, w)| (CategoryId::new(*c), w.to_string()))
        .collect()
}

#[test]
fn test_agreement_is_final() {
    let (cats, noms) = fixture();
    let official = names(&[("c1", "Oppenheimer")]);
    let media = names(&[("c1", "Oppenheimer (dir. Nolan)")]);

    let out = reconcile_winners(&cats, &noms, &official, &media);
    let winner = &out.winners[&CategoryId::new("c1")];
    assert_eq!(winner.nominee.as_str(), "n1");
    assert!(!winner.is_provisional);
    assert!(out.conflicts.is_empty());
}

#[test]
fn test_agreement_resolves_official_string() {
    let (cats, noms) = fixture();
    // Containment holds both ways; the official phrasing is the one resolved.
    let official = names(&[("c2", "Christopher Nolan")]);
    let media = names(&[("c2", "Nolan")]);

    let out = reconcile_winners(&cats, &noms, &official, &media);
    assert_eq!(out.winners[&CategoryId::new("c2")].nominee.as_str(), "n3");
}

#[test]
fn test_disagreement_is_conflict() {
    let (cats, noms) = fixture();
    let official = names(&[("c1", "Oppenheimer")]);
    let media = names(&[("c1", "Barbie")]);

    let out = reconcile_winners(&cats, &noms, &official, &media);
    assert!(out.winners.is_empty());
    assert_eq!(out.conflicts.len(), 1);
    assert_eq!(out.conflicts[0].category.as_str(), "c1");
    assert_eq!(out.conflicts[0].official, "Oppenheimer");
    assert_eq!(out.conflicts[0].media, "Barbie");
}

#[test]
fn test_media_only_is_provisional() {
    let (cats, noms) = fixture();
    let official = BTreeMap::new();
    let media = names(&[("c1", "Oppenheimer")]);

    let out = reconcile_winners(&cats, &noms, &official, &media);
    let winner = &out.winners[&CategoryId::new("c1")];
    assert_eq!(winner.nominee.as_str(), "n1");
    assert!(winner.is_provisional);
}

#[test]
fn test_official_only_is_final() {
    let (cats, noms) = fixture();
    let official = names(&[("c1", "Oppenheimer")]);
    let media = BTreeMap::new();

    let out = reconcile_winners(&cats, &noms, &official, &media);
    assert!(!out.winners[&CategoryId::new("c1")].is_provisional);
}

#[test]
fn test_neither_source_no_action() {
    let (cats, noms) = fixture();
    let out = reconcile_winners(&cats, &noms, &BTreeMap::new(), &BTreeMap::new());
    assert!(out.winners.is_empty());
    assert!(out.conflicts.is_empty());
}

#[test]
fn test_unresolvable_winner_string_skipped() {
    let (cats, noms) = fixture();
    // Agreed on a film that is not on the nominee list.
    let official = names(&[("c1", "Poor Things")]);
    let media = names(&[("c1", "Poor Things")]);

    let out = reconcile_winners(&cats, &noms, &official, &media);
    assert!(out.winners.is_empty());
    assert!(out.conflicts.is_empty());
}

#[test]
fn test_category_without_nominee_list_skipped() {
    let (cats, _) = fixture();
    let official = names(&[("c1", "Oppenheimer")]);

    let out = reconcile_winners(&cats, &BTreeMap::new(), &official, &BTreeMap::new());
    assert!(out.winners.is_empty());
}

#[test]
fn test_strings_agree_policy() {
    assert!(strings_agree("Oppenheimer", "OPPENHEIMER"));
    assert!(strings_agree("Oppenheimer", "Oppenheimer (dir. Nolan)"));
    assert!(strings_agree("Oppenheimer (dir. Nolan)", "Oppenheimer"));
    assert!(!strings_agree("Oppenheimer", "Barbie"));
    assert!(!strings_agree("", "Barbie"));
}
