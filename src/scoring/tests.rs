use super::*;
use crate::store::records::{BallotRecord, PickExpand};

fn category(id: &str, base_points: Option<i64>) -> CategoryRecord {
    CategoryRecord {
        id: CategoryId::new(id),
        event: EventId::new("oscars-2024"),
        name: format!("Category {id}"),
        base_points,
    }
}

fn pick(id: &str, user: &str, league: &str, category: &str, nominee: &str, power: bool) -> PickRecord {
    PickRecord {
        id: id.to_string(),
        ballot: format!("ballot-{user}-{league}"),
        category: CategoryId::new(category),
        nominee: NomineeId::new(nominee),
        is_power_pick: power,
        expand: Some(PickExpand {
            ballot: BallotRecord {
                id: format!("ballot-{user}-{league}"),
                event: EventId::new("oscars-2024"),
                user: UserId::new(user),
                league: LeagueId::new(league),
            },
        }),
    }
}

fn score(id: &str, user: &str, league: &str, totals: (i64, i64, i64)) -> ScoreRecord {
    ScoreRecord {
        id: id.to_string(),
        event: EventId::new("oscars-2024"),
        user: UserId::new(user),
        league: LeagueId::new(league),
        total_points: totals.0,
        correct_picks: totals.1,
        power_picks_hit: totals.2,
    }
}

fn winners(entries: &[(&str, &str)]) -> BTreeMap<CategoryId, NomineeId> {
    entries
        .iter()
        .map(|(c, n)| (CategoryId::new(*c), NomineeId::new(*n)))
        .collect()
}

fn key(user: &str, league: &str) -> (UserId, LeagueId) {
    (UserId::new(user), LeagueId::new(league))
}

#[test]
fn test_correct_pick_earns_base_points() {
    let picks = vec![pick("p1", "u1", "l1", "c1", "n1", false)];
    let totals = compute_totals(&picks, &[category("c1", None)], &winners(&[("c1", "n1")]));

    let t = &totals[&key("u1", "l1")];
    assert_eq!(t.total_points, 50);
    assert_eq!(t.correct_picks, 1);
    assert_eq!(t.power_picks_hit, 0);
}

#[test]
fn test_power_pick_triples_and_counts() {
    // One correct plain pick and one correct power pick: 50 + 150.
    let picks = vec![
        pick("p1", "u1", "l1", "c1", "n1", false),
        pick("p2", "u1", "l1", "c2", "n2", true),
    ];
    let cats = vec![category("c1", None), category("c2", None)];
    let totals = compute_totals(&picks, &cats, &winners(&[("c1", "n1"), ("c2", "n2")]));

    let t = &totals[&key("u1", "l1")];
    assert_eq!(t.total_points, 200);
    assert_eq!(t.correct_picks, 2);
    assert_eq!(t.power_picks_hit, 1);
}

#[test]
fn test_configured_base_points_used() {
    let picks = vec![pick("p1", "u1", "l1", "c1", "n1", true)];
    let totals = compute_totals(
        &picks,
        &[category("c1", Some(100))],
        &winners(&[("c1", "n1")]),
    );
    assert_eq!(totals[&key("u1", "l1")].total_points, 300);
}

#[test]
fn test_wrong_pick_earns_nothing() {
    let picks = vec![pick("p1", "u1", "l1", "c1", "n2", false)];
    let totals = compute_totals(&picks, &[category("c1", None)], &winners(&[("c1", "n1")]));
    assert!(totals.is_empty());
}

#[test]
fn test_undetermined_category_contributes_nothing() {
    let picks = vec![pick("p1", "u1", "l1", "c1", "n1", false)];
    let totals = compute_totals(&picks, &[category("c1", None)], &BTreeMap::new());
    assert!(totals.is_empty());
}

#[test]
fn test_groups_by_user_and_league() {
    // The same user in two leagues accumulates separately.
    let picks = vec![
        pick("p1", "u1", "l1", "c1", "n1", false),
        pick("p2", "u1", "l2", "c1", "n1", false),
        pick("p3", "u2", "l1", "c1", "n1", false),
    ];
    let totals = compute_totals(&picks, &[category("c1", None)], &winners(&[("c1", "n1")]));
    assert_eq!(totals.len(), 3);
    assert_eq!(totals[&key("u1", "l1")].total_points, 50);
    assert_eq!(totals[&key("u1", "l2")].total_points, 50);
    assert_eq!(totals[&key("u2", "l1")].total_points, 50);
}

#[test]
fn test_pick_without_expanded_ballot_skipped() {
    let mut orphan = pick("p1", "u1", "l1", "c1", "n1", false);
    orphan.expand = None;
    let totals = compute_totals(&[orphan], &[category("c1", None)], &winners(&[("c1", "n1")]));
    assert!(totals.is_empty());
}

#[test]
fn test_plan_creates_missing_row() {
    let event = EventId::new("oscars-2024");
    let mut totals = BTreeMap::new();
    totals.insert(key("u1", "l1"), ScoreTotals {
        total_points: 200,
        correct_picks: 2,
        power_picks_hit: 1,
    });

    let ops = plan_score_writes(&event, &totals, &[]).unwrap();
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        WriteOp::Create { collection, data } => {
            assert_eq!(*collection, collections::SCORES);
            assert_eq!(data["event"], "oscars-2024");
            assert_eq!(data["user"], "u1");
            assert_eq!(data["league"], "l1");
            assert_eq!(data["total_points"], 200);
        }
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn test_plan_updates_changed_row() {
    let event = EventId::new("oscars-2024");
    let mut totals = BTreeMap::new();
    totals.insert(key("u1", "l1"), ScoreTotals {
        total_points: 100,
        correct_picks: 2,
        power_picks_hit: 0,
    });
    let existing = vec![score("s1", "u1", "l1", (50, 1, 0))];

    let ops = plan_score_writes(&event, &totals, &existing).unwrap();
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        WriteOp::Update { id, data, .. } => {
            assert_eq!(id, "s1");
            assert_eq!(data["total_points"], 100);
            assert_eq!(data["correct_picks"], 2);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn test_plan_unchanged_row_writes_nothing() {
    let event = EventId::new("oscars-2024");
    let mut totals = BTreeMap::new();
    totals.insert(key("u1", "l1"), ScoreTotals {
        total_points: 50,
        correct_picks: 1,
        power_picks_hit: 0,
    });
    let existing = vec![score("s1", "u1", "l1", (50, 1, 0))];

    let ops = plan_score_writes(&event, &totals, &existing).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn test_plan_zeroes_stale_row() {
    let event = EventId::new("oscars-2024");
    let existing = vec![score("s1", "u1", "l1", (150, 2, 1))];

    let ops = plan_score_writes(&event, &BTreeMap::new(), &existing).unwrap();
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        WriteOp::Update { id, data, .. } => {
            assert_eq!(id, "s1");
            assert_eq!(data["total_points"], 0);
            assert_eq!(data["correct_picks"], 0);
            assert_eq!(data["power_picks_hit"], 0);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn test_plan_already_zero_row_writes_nothing() {
    let event = EventId::new("oscars-2024");
    let existing = vec![score("s1", "u1", "l1", (0, 0, 0))];

    let ops = plan_score_writes(&event, &BTreeMap::new(), &existing).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn test_full_recompute_supersedes_rather_than_increments() {
    // Re-running over identical inputs: diff of computed vs stored is empty,
    // so nothing can double-count.
    let picks = vec![
        pick("p1", "u1", "l1", "c1", "n1", false),
        pick("p2", "u1", "l1", "c2", "n2", true),
    ];
    let cats = vec![category("c1", None), category("c2", None)];
    let wins = winners(&[("c1", "n1"), ("c2", "n2")]);
    let event = EventId::new("oscars-2024");

    let totals = compute_totals(&picks, &cats, &wins);
    let first = plan_score_writes(&event, &totals, &[]).unwrap();
    assert_eq!(first.len(), 1);

    // Simulate the stored row the first pass created.
    let existing = vec![score("s1", "u1", "l1", (200, 2, 1))];
    let totals = compute_totals(&picks, &cats, &wins);
    let second = plan_score_writes(&event, &totals, &existing).unwrap();
    assert!(second.is_empty());
}
