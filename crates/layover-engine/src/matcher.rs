//! Group-scoped match enumeration.
//!
//! A traveler sees the itineraries shared into the groups they belong to.
//! Within each group every pair of shared itineraries is run through
//! [`overlap`]; each hit becomes a [`Match`] tagged with that group.
//!
//! # Semantics
//!
//! - Groups are visited in membership order, pairs in `(i, j)`, `i < j`
//!   share-list order, so output order is reproducible for a fixed input.
//! - A pair shared into two groups yields one match per group.
//! - Pairs are formed over list positions: an itinerary is never paired with
//!   its own slot, but two itineraries of the same traveler are compared.
//! - The enumeration is brute force, O(g · k²) for `g` groups of `k` shared
//!   itineraries. Groups are human-sized, and the duplicate policy above
//!   relies on visiting every pair of every group.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Group, GroupId, Itinerary, ItineraryId, Traveler, TravelerId};
use crate::overlap::{overlap, OverlapWindow};

/// Read access to travelers, group memberships and shares.
///
/// Implementations must return a consistent view for the duration of one
/// enumeration call; the matcher only ever takes shared borrows.
pub trait TravelDirectory {
    /// Look up a traveler; `None` if the id is unknown.
    fn traveler(&self, id: &TravelerId) -> Option<&Traveler>;

    /// Look up a group; `None` if the id is unknown.
    fn group(&self, id: &GroupId) -> Option<&Group>;

    /// Groups the traveler belongs to, in membership order.
    fn groups_of(&self, traveler: &TravelerId) -> Vec<&Group>;

    /// Itineraries shared into the group, in share order.
    fn shared_itineraries(&self, group: &GroupId) -> Vec<&Itinerary>;
}

/// A layover overlap discovered inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The group in which both itineraries are shared.
    pub group: GroupId,
    #[serde(flatten)]
    pub window: OverlapWindow,
    pub itinerary_a: ItineraryId,
    pub itinerary_b: ItineraryId,
}

/// Enumerate every match visible to `traveler` through their groups.
///
/// An unknown traveler, a traveler without groups, and groups without
/// shared itineraries all yield an empty result.
pub fn find_matches<D>(directory: &D, traveler: &TravelerId) -> Vec<Match>
where
    D: TravelDirectory + ?Sized,
{
    let mut matches = Vec::new();

    if directory.traveler(traveler).is_none() {
        debug!(%traveler, "unknown traveler, no matches");
        return matches;
    }

    let groups = directory.groups_of(traveler);
    for group in &groups {
        let shared = directory.shared_itineraries(&group.id);
        collect_group_matches(&group.id, &shared, &mut matches);
    }

    debug!(
        %traveler,
        groups = groups.len(),
        matches = matches.len(),
        "enumerated layover matches"
    );
    matches
}

/// Enumerate the matches inside a single group, regardless of who asks.
///
/// An unknown group yields an empty result.
pub fn find_group_matches<D>(directory: &D, group: &GroupId) -> Vec<Match>
where
    D: TravelDirectory + ?Sized,
{
    let mut matches = Vec::new();

    if directory.group(group).is_none() {
        debug!(%group, "unknown group, no matches");
        return matches;
    }

    let shared = directory.shared_itineraries(group);
    collect_group_matches(group, &shared, &mut matches);

    debug!(%group, matches = matches.len(), "enumerated group matches");
    matches
}

fn collect_group_matches(group: &GroupId, shared: &[&Itinerary], out: &mut Vec<Match>) {
    for (i, a) in shared.iter().enumerate() {
        for b in &shared[i + 1..] {
            if let Some(window) = overlap(a, b) {
                trace!(
                    %group,
                    itinerary_a = %a.id,
                    itinerary_b = %b.id,
                    airport = %window.airport,
                    minutes = window.duration_minutes,
                    "layover match"
                );
                out.push(Match {
                    group: group.clone(),
                    window,
                    itinerary_a: a.id.clone(),
                    itinerary_b: b.id.clone(),
                });
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
