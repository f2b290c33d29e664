//! Error types for layover-engine operations.
//!
//! Matching itself never fails. These errors come from building or loading
//! a [`Directory`](crate::directory::Directory) and from explicit itinerary
//! validation.

use thiserror::Error;

use crate::model::{GroupId, ItineraryId, TravelerId};

#[derive(Error, Debug)]
pub enum LayoverError {
    #[error("Unknown traveler: {0}")]
    UnknownTraveler(TravelerId),

    #[error("Unknown group: {0}")]
    UnknownGroup(GroupId),

    #[error("Unknown itinerary: {0}")]
    UnknownItinerary(ItineraryId),

    #[error("Duplicate traveler: {0}")]
    DuplicateTraveler(TravelerId),

    #[error("Duplicate group: {0}")]
    DuplicateGroup(GroupId),

    #[error("Duplicate itinerary: {0}")]
    DuplicateItinerary(ItineraryId),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Invalid itinerary {id}: {reason}")]
    InvalidItinerary { id: ItineraryId, reason: String },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoverError>;
