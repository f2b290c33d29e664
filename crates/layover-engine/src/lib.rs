//! # layover-engine
//!
//! Deterministic layover matching for travel groups.
//!
//! Travelers share itineraries into groups. Two shared itineraries *match*
//! when they lay over at the same airport at the same time, so their owners
//! can meet between flights. Matching is a pure computation over data the
//! caller supplies: no clock, no I/O, no hidden session state.
//!
//! ## Modules
//!
//! - [`model`] — Travelers, itineraries, groups and their identities
//! - [`overlap`] — Pairwise layover intersection
//! - [`matcher`] — Group-scoped match enumeration over a [`TravelDirectory`]
//! - [`directory`] — In-memory directory with JSON snapshots
//! - [`validation`] — Optional itinerary sanity checks
//! - [`error`] — Error types

pub mod directory;
pub mod error;
pub mod matcher;
pub mod model;
pub mod overlap;
pub mod validation;

pub use directory::{Directory, Membership, Share, Snapshot};
pub use error::LayoverError;
pub use matcher::{find_group_matches, find_matches, Match, TravelDirectory};
pub use model::{Group, GroupId, Itinerary, ItineraryId, Layover, Traveler, TravelerId};
pub use overlap::{overlap, OverlapWindow};
pub use validation::{validate_all, validate_itinerary};
