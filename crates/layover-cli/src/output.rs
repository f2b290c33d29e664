//! Plain-text rendering of matches, groups and itineraries.

use layover_engine::{Directory, Group, Itinerary, ItineraryId, Match, TravelDirectory};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line per match, e.g.
/// `[work] ATL 2026-03-15 11:00 - 2026-03-15 12:00 (1 hour): x (alice) & y (bob)`.
pub fn render_match(directory: &Directory, m: &Match) -> String {
    format!(
        "[{}] {} {} - {} ({}): {} & {}",
        m.group,
        m.window.airport,
        m.window.start.format(TIME_FORMAT),
        m.window.end.format(TIME_FORMAT),
        format_minutes(m.window.duration_minutes),
        describe_itinerary(directory, &m.itinerary_a),
        describe_itinerary(directory, &m.itinerary_b),
    )
}

/// `work (Work, 2 members, 2 shared)`.
pub fn render_group(directory: &Directory, group: &Group) -> String {
    format!(
        "{} ({}, {} members, {} shared)",
        group.id,
        group.name,
        directory.members_of(&group.id).len(),
        directory.shared_itineraries(&group.id).len()
    )
}

pub fn render_itinerary(it: &Itinerary) -> String {
    let mut line = it.id.to_string();
    if let (Some(airline), Some(number)) = (&it.airline, &it.flight_number) {
        line.push_str(&format!(" {airline} {number}"));
    }
    if let (Some(from), Some(to)) = (&it.departure_airport, &it.arrival_airport) {
        line.push_str(&format!(" {from}-{to}"));
    }
    match it.layover() {
        Some(layover) => line.push_str(&format!(
            ", layover {} {} - {}",
            layover.airport,
            layover.start.format(TIME_FORMAT),
            layover.end.format(TIME_FORMAT)
        )),
        None => line.push_str(", no layover"),
    }
    line
}

/// "x (alice)", or just the id if the itinerary or its owner is unknown.
fn describe_itinerary(directory: &Directory, id: &ItineraryId) -> String {
    directory
        .itinerary(id)
        .and_then(|it| directory.traveler(&it.traveler))
        .map(|t| format!("{id} ({})", t.username))
        .unwrap_or_else(|| id.to_string())
}

/// Human-readable duration, e.g. "1 day, 2 hours, 5 minutes".
pub fn format_minutes(total: i64) -> String {
    let total = total.max(0);
    let days = total / 1440;
    let hours = (total % 1440) / 60;
    let minutes = total % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(plural(minutes, "minute"));
    }
    parts.join(", ")
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" })
}
