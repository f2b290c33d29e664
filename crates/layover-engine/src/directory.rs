//! In-memory travel directory.
//!
//! [`Directory`] owns travelers, itineraries and groups, and keeps two
//! explicit indexes in place of object back-references:
//!
//! - the membership index: traveler → groups, in the order they joined
//! - the share index: group → itineraries, in the order they were shared
//!
//! It implements [`TravelDirectory`], so it can be handed straight to
//! [`find_matches`](crate::matcher::find_matches). A directory can be saved
//! to and loaded from a JSON [`Snapshot`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LayoverError, Result};
use crate::matcher::TravelDirectory;
use crate::model::{Group, GroupId, Itinerary, ItineraryId, Traveler, TravelerId};

/// A traveler's membership in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub group: GroupId,
    pub traveler: TravelerId,
}

/// An itinerary shared into a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub group: GroupId,
    pub itinerary: ItineraryId,
}

/// Serialized form of a [`Directory`].
///
/// Memberships and shares are replayed in file order on load, which fixes
/// the order matches are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub travelers: Vec<Traveler>,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default)]
    pub shares: Vec<Share>,
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    travelers: Vec<Traveler>,
    itineraries: Vec<Itinerary>,
    groups: Vec<Group>,
    memberships: Vec<Membership>,
    shares: Vec<Share>,
    traveler_index: HashMap<TravelerId, usize>,
    username_index: HashMap<String, usize>,
    itinerary_index: HashMap<ItineraryId, usize>,
    group_index: HashMap<GroupId, usize>,
    groups_by_traveler: HashMap<TravelerId, Vec<GroupId>>,
    shares_by_group: HashMap<GroupId, Vec<ItineraryId>>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Register a traveler. Ids, usernames and emails are unique.
    pub fn register_traveler(&mut self, traveler: Traveler) -> Result<()> {
        if self.traveler_index.contains_key(&traveler.id) {
            return Err(LayoverError::DuplicateTraveler(traveler.id));
        }
        if self.username_index.contains_key(&traveler.username) {
            return Err(LayoverError::DuplicateUsername(traveler.username));
        }
        if self.travelers.iter().any(|t| t.email == traveler.email) {
            return Err(LayoverError::DuplicateEmail(traveler.email));
        }
        let slot = self.travelers.len();
        self.traveler_index.insert(traveler.id.clone(), slot);
        self.username_index.insert(traveler.username.clone(), slot);
        self.travelers.push(traveler);
        Ok(())
    }

    /// Replace a traveler's home airport and contact line.
    pub fn update_profile(
        &mut self,
        traveler: &TravelerId,
        home_airport: Option<String>,
        contact_info: Option<String>,
    ) -> Result<()> {
        let &slot = self
            .traveler_index
            .get(traveler)
            .ok_or_else(|| LayoverError::UnknownTraveler(traveler.clone()))?;
        let profile = &mut self.travelers[slot];
        profile.home_airport = home_airport;
        profile.contact_info = contact_info;
        Ok(())
    }

    /// Record an itinerary for an already registered traveler.
    pub fn add_itinerary(&mut self, itinerary: Itinerary) -> Result<()> {
        self.require_traveler(&itinerary.traveler)?;
        if self.itinerary_index.contains_key(&itinerary.id) {
            return Err(LayoverError::DuplicateItinerary(itinerary.id));
        }
        self.itinerary_index
            .insert(itinerary.id.clone(), self.itineraries.len());
        self.itineraries.push(itinerary);
        Ok(())
    }

    /// Create a group. The owner automatically becomes its first member.
    pub fn create_group(&mut self, group: Group) -> Result<()> {
        let id = group.id.clone();
        let owner = group.owner.clone();
        self.insert_group(group)?;
        self.add_member(&id, &owner)
    }

    /// Add a traveler to a group. Joining twice is a no-op.
    pub fn add_member(&mut self, group: &GroupId, traveler: &TravelerId) -> Result<()> {
        self.require_group(group)?;
        self.require_traveler(traveler)?;

        let joined = self.groups_by_traveler.entry(traveler.clone()).or_default();
        if joined.contains(group) {
            return Ok(());
        }
        joined.push(group.clone());
        self.memberships.push(Membership {
            group: group.clone(),
            traveler: traveler.clone(),
        });
        Ok(())
    }

    /// Add a traveler to a group by username.
    pub fn add_member_by_username(&mut self, group: &GroupId, username: &str) -> Result<()> {
        let traveler = self
            .traveler_by_username(username)
            .map(|t| t.id.clone())
            .ok_or_else(|| LayoverError::UnknownUsername(username.to_string()))?;
        self.add_member(group, &traveler)
    }

    /// Share an itinerary into a group. Sharing twice is a no-op.
    pub fn share_itinerary(&mut self, itinerary: &ItineraryId, group: &GroupId) -> Result<()> {
        self.require_group(group)?;
        if !self.itinerary_index.contains_key(itinerary) {
            return Err(LayoverError::UnknownItinerary(itinerary.clone()));
        }

        let shared = self.shares_by_group.entry(group.clone()).or_default();
        if shared.contains(itinerary) {
            return Ok(());
        }
        shared.push(itinerary.clone());
        self.shares.push(Share {
            group: group.clone(),
            itinerary: itinerary.clone(),
        });
        Ok(())
    }

    fn insert_group(&mut self, group: Group) -> Result<()> {
        self.require_traveler(&group.owner)?;
        if self.group_index.contains_key(&group.id) {
            return Err(LayoverError::DuplicateGroup(group.id));
        }
        self.group_index.insert(group.id.clone(), self.groups.len());
        self.groups.push(group);
        Ok(())
    }

    fn require_traveler(&self, id: &TravelerId) -> Result<()> {
        if self.traveler_index.contains_key(id) {
            Ok(())
        } else {
            Err(LayoverError::UnknownTraveler(id.clone()))
        }
    }

    fn require_group(&self, id: &GroupId) -> Result<()> {
        if self.group_index.contains_key(id) {
            Ok(())
        } else {
            Err(LayoverError::UnknownGroup(id.clone()))
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn traveler_by_username(&self, username: &str) -> Option<&Traveler> {
        self.username_index
            .get(username)
            .map(|&i| &self.travelers[i])
    }

    pub fn itinerary(&self, id: &ItineraryId) -> Option<&Itinerary> {
        self.itinerary_index.get(id).map(|&i| &self.itineraries[i])
    }

    /// The traveler's own itineraries, in the order they were added.
    pub fn itineraries_of(&self, traveler: &TravelerId) -> Vec<&Itinerary> {
        self.itineraries
            .iter()
            .filter(|it| &it.traveler == traveler)
            .collect()
    }

    /// Groups the traveler created, in creation order.
    pub fn owned_groups(&self, traveler: &TravelerId) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| &g.owner == traveler)
            .collect()
    }

    /// Members of a group, in the order they joined.
    pub fn members_of(&self, group: &GroupId) -> Vec<&Traveler> {
        self.memberships
            .iter()
            .filter(|m| &m.group == group)
            .filter_map(|m| self.traveler_index.get(&m.traveler))
            .map(|&i| &self.travelers[i])
            .collect()
    }

    // ── Snapshots ───────────────────────────────────────────────────────

    /// Rebuild a directory from a snapshot, checking every reference.
    ///
    /// Groups are inserted as-is: owners are members only if the snapshot
    /// lists them under `memberships`.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut directory = Self::new();
        for traveler in snapshot.travelers {
            directory.register_traveler(traveler)?;
        }
        for itinerary in snapshot.itineraries {
            directory.add_itinerary(itinerary)?;
        }
        for group in snapshot.groups {
            directory.insert_group(group)?;
        }
        for membership in &snapshot.memberships {
            directory.add_member(&membership.group, &membership.traveler)?;
        }
        for share in &snapshot.shares {
            directory.share_itinerary(&share.itinerary, &share.group)?;
        }

        debug!(
            travelers = directory.travelers.len(),
            itineraries = directory.itineraries.len(),
            groups = directory.groups.len(),
            memberships = directory.memberships.len(),
            shares = directory.shares.len(),
            "loaded directory snapshot"
        );
        Ok(directory)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            travelers: self.travelers.clone(),
            itineraries: self.itineraries.clone(),
            groups: self.groups.clone(),
            memberships: self.memberships.clone(),
            shares: self.shares.clone(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }
}

impl TravelDirectory for Directory {
    fn traveler(&self, id: &TravelerId) -> Option<&Traveler> {
        self.traveler_index.get(id).map(|&i| &self.travelers[i])
    }

    fn group(&self, id: &GroupId) -> Option<&Group> {
        self.group_index.get(id).map(|&i| &self.groups[i])
    }

    fn groups_of(&self, traveler: &TravelerId) -> Vec<&Group> {
        self.groups_by_traveler
            .get(traveler)
            .into_iter()
            .flatten()
            .filter_map(|id| self.group_index.get(id))
            .map(|&i| &self.groups[i])
            .collect()
    }

    fn shared_itineraries(&self, group: &GroupId) -> Vec<&Itinerary> {
        self.shares_by_group
            .get(group)
            .into_iter()
            .flatten()
            .filter_map(|id| self.itinerary_index.get(id))
            .map(|&i| &self.itineraries[i])
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
