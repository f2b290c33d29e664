//! End-to-end matching through an in-memory directory.

use chrono::{NaiveDate, NaiveDateTime};
use layover_engine::{
    find_group_matches, find_matches, Directory, Group, GroupId, Itinerary, ItineraryId, Traveler,
    TravelerId,
};

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn traveler(id: &str) -> Traveler {
    Traveler::new(id, id, &format!("{id}@example.com"))
}

/// alice and bob are in "work" and "family"; carol is only in "family".
/// x (alice) and y (bob) overlap at ATL and are shared into both groups.
/// z (carol) overlaps x at ATL but is only shared into "family".
fn directory() -> Directory {
    let mut dir = Directory::new();
    for id in ["alice", "bob", "carol", "dave"] {
        dir.register_traveler(traveler(id)).unwrap();
    }

    dir.add_itinerary(
        Itinerary::new("x", "alice")
            .with_flight("Delta", "DL100")
            .with_layover("ATL", at(10), at(12)),
    )
    .unwrap();
    dir.add_itinerary(Itinerary::new("y", "bob").with_layover("ATL", at(11), at(13)))
        .unwrap();
    dir.add_itinerary(Itinerary::new("z", "carol").with_layover("ATL", at(9), at(11)))
        .unwrap();

    dir.create_group(Group::new("work", "Work", "alice")).unwrap();
    dir.create_group(Group::new("family", "Family", "carol"))
        .unwrap();
    let work = GroupId::new("work");
    let family = GroupId::new("family");
    dir.add_member(&work, &TravelerId::new("bob")).unwrap();
    dir.add_member(&family, &TravelerId::new("alice")).unwrap();
    dir.add_member(&family, &TravelerId::new("bob")).unwrap();

    for it in ["x", "y"] {
        dir.share_itinerary(&ItineraryId::new(it), &work).unwrap();
    }
    for it in ["x", "y", "z"] {
        dir.share_itinerary(&ItineraryId::new(it), &family).unwrap();
    }
    dir
}

fn summary(dir: &Directory, traveler: &str) -> Vec<(String, String, String, i64)> {
    find_matches(dir, &TravelerId::new(traveler))
        .into_iter()
        .map(|m| {
            (
                m.group.to_string(),
                m.itinerary_a.to_string(),
                m.itinerary_b.to_string(),
                m.window.duration_minutes,
            )
        })
        .collect()
}

fn row(group: &str, a: &str, b: &str, minutes: i64) -> (String, String, String, i64) {
    (group.to_string(), a.to_string(), b.to_string(), minutes)
}

#[test]
fn pair_shared_into_two_groups_is_reported_per_group() {
    let dir = directory();
    assert_eq!(
        summary(&dir, "alice"),
        vec![
            row("work", "x", "y", 60),
            row("family", "x", "y", 60),
            row("family", "x", "z", 60),
        ]
    );
}

#[test]
fn visibility_is_scoped_to_membership() {
    let dir = directory();
    // carol only sees "family"
    assert_eq!(
        summary(&dir, "carol"),
        vec![row("family", "x", "y", 60), row("family", "x", "z", 60)]
    );
    // dave is registered but in no group
    assert!(summary(&dir, "dave").is_empty());
}

#[test]
fn unknown_traveler_sees_nothing() {
    let dir = directory();
    assert!(summary(&dir, "nonexistent-id").is_empty());
}

#[test]
fn group_listing_matches_member_view() {
    let dir = directory();
    let family = find_group_matches(&dir, &GroupId::new("family"));
    let carol = find_matches(&dir, &TravelerId::new("carol"));
    assert_eq!(family, carol);
}

#[test]
fn repeated_calls_are_deterministic() {
    let dir = directory();
    let first = find_matches(&dir, &TravelerId::new("bob"));
    let second = find_matches(&dir, &TravelerId::new("bob"));
    assert_eq!(first, second);
}

#[test]
fn concurrent_enumeration_needs_no_synchronization() {
    let dir = directory();
    let expected = summary(&dir, "alice");
    let dir = &dir;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || summary(dir, "alice")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
