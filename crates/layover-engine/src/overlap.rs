//! Pairwise layover overlap.
//!
//! Two itineraries overlap when both lay over at the same airport and their
//! layover windows intersect for a positive amount of time. Touching windows
//! (one ends exactly when the other starts) do not overlap.
//!
//! # Malformed windows
//!
//! No validation happens here. A window with `start > end` can never satisfy
//! `latest_start < earliest_end`, so it is silently excluded. Use
//! [`crate::validation::validate_itinerary`] to reject such input up front.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::Itinerary;

/// The intersection of two layovers at one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    /// Airport code both layovers share.
    pub airport: String,
    /// The later of the two layover starts.
    pub start: NaiveDateTime,
    /// The earlier of the two layover ends.
    pub end: NaiveDateTime,
    /// Whole minutes between `start` and `end`, truncated. A window shorter
    /// than one minute reports 0.
    pub duration_minutes: i64,
}

/// Compute the layover overlap of two itineraries.
///
/// Returns `None` ("no match") when either itinerary lacks a complete
/// layover, the airports differ, or the intersection is empty or zero-length.
/// The result does not depend on argument order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use layover_engine::{overlap, Itinerary};
///
/// let at = |h| NaiveDate::from_ymd_opt(2026, 3, 15).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let a = Itinerary::new("a", "alice").with_layover("ATL", at(10), at(12));
/// let b = Itinerary::new("b", "bob").with_layover("ATL", at(11), at(13));
///
/// let window = overlap(&a, &b).unwrap();
/// assert_eq!(window.airport, "ATL");
/// assert_eq!(window.start, at(11));
/// assert_eq!(window.end, at(12));
/// assert_eq!(window.duration_minutes, 60);
/// ```
pub fn overlap(a: &Itinerary, b: &Itinerary) -> Option<OverlapWindow> {
    let first = a.layover()?;
    let second = b.layover()?;

    if first.airport != second.airport {
        return None;
    }

    let latest_start = first.start.max(second.start);
    let earliest_end = first.end.min(second.end);

    if latest_start < earliest_end {
        Some(OverlapWindow {
            airport: first.airport.to_string(),
            start: latest_start,
            end: earliest_end,
            duration_minutes: (earliest_end - latest_start).num_minutes(),
        })
    } else {
        None
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
