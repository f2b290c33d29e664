//! Explicit itinerary validation.
//!
//! Matching never validates: an incomplete or inverted layover simply
//! produces no match. Callers that want to tell garbage input apart from
//! genuinely non-overlapping layovers run [`validate_itinerary`] first and
//! get a distinct [`LayoverError::InvalidItinerary`].

use crate::error::{LayoverError, Result};
use crate::model::Itinerary;

/// Check that an itinerary's layover fields are coherent.
///
/// # Errors
///
/// Returns [`LayoverError::InvalidItinerary`] when:
/// - the layover airport is blank,
/// - an airport is given without both timestamps,
/// - timestamps are given without an airport,
/// - the layover starts after it ends.
pub fn validate_itinerary(itinerary: &Itinerary) -> Result<()> {
    let invalid = |reason: &str| LayoverError::InvalidItinerary {
        id: itinerary.id.clone(),
        reason: reason.to_string(),
    };

    match (
        itinerary.layover_airport.as_deref(),
        itinerary.layover_start,
        itinerary.layover_end,
    ) {
        (None, None, None) => Ok(()),
        (None, _, _) => Err(invalid("layover times given without a layover airport")),
        (Some(airport), _, _) if airport.trim().is_empty() => {
            Err(invalid("layover airport is blank"))
        }
        (Some(_), Some(start), Some(end)) if start > end => Err(invalid(&format!(
            "layover starts at {start} but ends at {end}"
        ))),
        (Some(_), Some(_), Some(_)) => Ok(()),
        (Some(_), _, _) => Err(invalid("layover airport given without start and end times")),
    }
}

/// Validate every itinerary, collecting all failures in input order.
pub fn validate_all<'a, I>(itineraries: I) -> Vec<LayoverError>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    itineraries
        .into_iter()
        .filter_map(|it| validate_itinerary(it).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn reason(result: Result<()>) -> String {
        match result {
            Err(LayoverError::InvalidItinerary { reason, .. }) => reason,
            other => panic!("expected InvalidItinerary, got {other:?}"),
        }
    }

    #[test]
    fn test_no_layover_is_valid() {
        assert!(validate_itinerary(&Itinerary::new("a", "alice")).is_ok());
    }

    #[test]
    fn test_complete_layover_is_valid() {
        let it = Itinerary::new("a", "alice").with_layover("ATL", at(10), at(12));
        assert!(validate_itinerary(&it).is_ok());
    }

    #[test]
    fn test_zero_length_layover_is_valid() {
        let it = Itinerary::new("a", "alice").with_layover("ATL", at(10), at(10));
        assert!(validate_itinerary(&it).is_ok());
    }

    #[test]
    fn test_inverted_layover_is_invalid() {
        let it = Itinerary::new("a", "alice").with_layover("ATL", at(12), at(10));
        let reason = reason(validate_itinerary(&it));
        assert!(reason.contains("starts at"), "got: {reason}");
    }

    #[test]
    fn test_airport_without_times_is_invalid() {
        let mut it = Itinerary::new("a", "alice").with_layover("ATL", at(10), at(12));
        it.layover_end = None;
        let reason = reason(validate_itinerary(&it));
        assert!(reason.contains("without start and end"), "got: {reason}");
    }

    #[test]
    fn test_times_without_airport_is_invalid() {
        let mut it = Itinerary::new("a", "alice").with_layover("ATL", at(10), at(12));
        it.layover_airport = None;
        let reason = reason(validate_itinerary(&it));
        assert!(reason.contains("without a layover airport"), "got: {reason}");
    }

    #[test]
    fn test_blank_airport_is_invalid() {
        let it = Itinerary::new("a", "alice").with_layover("  ", at(10), at(12));
        assert_eq!(reason(validate_itinerary(&it)), "layover airport is blank");
    }

    #[test]
    fn test_error_message_names_itinerary() {
        let it = Itinerary::new("trip-7", "alice").with_layover("", at(10), at(12));
        let err = validate_itinerary(&it).unwrap_err().to_string();
        assert_eq!(err, "Invalid itinerary trip-7: layover airport is blank");
    }

    #[test]
    fn test_validate_all_collects_in_order() {
        let its = vec![
            Itinerary::new("ok", "alice").with_layover("ATL", at(10), at(12)),
            Itinerary::new("bad-1", "alice").with_layover("ATL", at(12), at(10)),
            Itinerary::new("none", "alice"),
            Itinerary::new("bad-2", "alice").with_layover("", at(10), at(12)),
        ];
        let ids: Vec<String> = validate_all(&its)
            .into_iter()
            .map(|e| match e {
                LayoverError::InvalidItinerary { id, .. } => id.to_string(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec!["bad-1", "bad-2"]);
    }
}
