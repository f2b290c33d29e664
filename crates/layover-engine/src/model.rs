//! Travelers, itineraries and groups.
//!
//! Entities carry no back-references. Who belongs to which group and which
//! itinerary is shared where lives in the indexes of a
//! [`TravelDirectory`](crate::matcher::TravelDirectory).

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identity of a registered traveler.
    TravelerId
);
string_id!(
    /// Identity of a travel group.
    GroupId
);
string_id!(
    /// Identity of a single itinerary.
    ItineraryId
);

// ── Traveler ────────────────────────────────────────────────────────────────

/// A registered traveler and their public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    pub id: TravelerId,
    pub username: String,
    pub email: String,
    /// IATA code of the traveler's home airport, if they set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_airport: Option<String>,
    /// Free-form contact line shown to matched travelers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

impl Traveler {
    pub fn new(id: impl Into<TravelerId>, username: &str, email: &str) -> Self {
        Self {
            id: id.into(),
            username: username.to_string(),
            email: email.to_string(),
            home_airport: None,
            contact_info: None,
        }
    }
}

// ── Itinerary ───────────────────────────────────────────────────────────────

/// A flight itinerary with an optional layover.
///
/// Flight metadata is carried for display only; matching looks exclusively
/// at the three `layover_*` fields. A layover is present when
/// `layover_airport` is set. Callers are expected to supply
/// `layover_start <= layover_end`; see [`crate::validation`] for an explicit
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub traveler: TravelerId,
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub arrival_airport: Option<String>,
    #[serde(default)]
    pub departure_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub arrival_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub layover_airport: Option<String>,
    #[serde(default)]
    pub layover_start: Option<NaiveDateTime>,
    #[serde(default)]
    pub layover_end: Option<NaiveDateTime>,
}

/// Borrowed view of a complete layover: airport plus both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layover<'a> {
    pub airport: &'a str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Itinerary {
    /// An itinerary with no flight metadata and no layover.
    pub fn new(id: impl Into<ItineraryId>, traveler: impl Into<TravelerId>) -> Self {
        Self {
            id: id.into(),
            traveler: traveler.into(),
            airline: None,
            flight_number: None,
            departure_airport: None,
            arrival_airport: None,
            departure_time: None,
            arrival_time: None,
            layover_airport: None,
            layover_start: None,
            layover_end: None,
        }
    }

    pub fn with_flight(mut self, airline: &str, flight_number: &str) -> Self {
        self.airline = Some(airline.to_string());
        self.flight_number = Some(flight_number.to_string());
        self
    }

    pub fn with_route(
        mut self,
        departure_airport: &str,
        departure_time: NaiveDateTime,
        arrival_airport: &str,
        arrival_time: NaiveDateTime,
    ) -> Self {
        self.departure_airport = Some(departure_airport.to_string());
        self.departure_time = Some(departure_time);
        self.arrival_airport = Some(arrival_airport.to_string());
        self.arrival_time = Some(arrival_time);
        self
    }

    pub fn with_layover(
        mut self,
        airport: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        self.layover_airport = Some(airport.to_string());
        self.layover_start = Some(start);
        self.layover_end = Some(end);
        self
    }

    /// Whether a non-empty layover airport is recorded.
    pub fn has_layover(&self) -> bool {
        self.layover_airport_code().is_some()
    }

    /// The layover, if the airport and both endpoints are all recorded.
    pub fn layover(&self) -> Option<Layover<'_>> {
        Some(Layover {
            airport: self.layover_airport_code()?,
            start: self.layover_start?,
            end: self.layover_end?,
        })
    }

    /// An empty code counts as no airport.
    fn layover_airport_code(&self) -> Option<&str> {
        self.layover_airport.as_deref().filter(|code| !code.is_empty())
    }
}

// ── Group ───────────────────────────────────────────────────────────────────

/// A travel group. Members and shared itineraries are indexed by the
/// directory, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub owner: TravelerId,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, name: &str, owner: impl Into<TravelerId>) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            owner: owner.into(),
        }
    }
}
