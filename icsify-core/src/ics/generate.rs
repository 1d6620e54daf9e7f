//! ICS document generation.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::content_line::{ContentLine, param_value_is_valid};
use super::document::IcsDocument;
use crate::error::{IcsifyError, IcsifyResult};
use crate::event::EventRecord;

/// Local date-time form used with a TZID parameter (no `Z` suffix).
pub const ICS_LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Generate one calendar document holding every event, in input order.
///
/// `timezone_id` is attached to every DTSTART/DTEND as `TZID` and written
/// verbatim (quoted if it contains `:`, `;` or `,`). A zone with control
/// characters or `"` would break the line structure and is rejected. If any event fails validation or time resolution the whole
/// batch is rejected with the failing event's position; no partial document
/// is produced.
pub fn serialize(events: &[EventRecord], timezone_id: &str) -> IcsifyResult<IcsDocument> {
    if events.is_empty() {
        return Err(IcsifyError::EmptyBatch);
    }
    if !param_value_is_valid(timezone_id) {
        return Err(IcsifyError::InvalidTimezone(timezone_id.to_string()));
    }

    let mut out = String::with_capacity(64 + events.len() * 256);
    ContentLine::new("BEGIN", "VCALENDAR").write_to(&mut out);
    ContentLine::new("VERSION", "2.0").write_to(&mut out);

    for (index, event) in events.iter().enumerate() {
        write_event(&mut out, event, timezone_id)
            .map_err(|reason| IcsifyError::InvalidEventData { index, reason })?;
    }

    ContentLine::new("END", "VCALENDAR").write_to(&mut out);

    info!(
        events = events.len(),
        timezone = timezone_id,
        bytes = out.len(),
        "Generated calendar document"
    );

    Ok(IcsDocument::new(out, events.len()))
}

/// Append one VEVENT block. Fields are always written in the same order:
/// DTSTART, DTEND, SUMMARY, DESCRIPTION, LOCATION.
fn write_event(out: &mut String, event: &EventRecord, tzid: &str) -> Result<(), String> {
    event.validate()?;
    let interval = event.interval().map_err(|e| e.to_string())?;

    debug!(
        title = %event.title,
        time = %event.time,
        start = %interval.start,
        end = %interval.end,
        "Resolved event time"
    );

    ContentLine::new("BEGIN", "VEVENT").write_to(out);
    zoned_datetime_line("DTSTART", &interval.start, tzid).write_to(out);
    zoned_datetime_line("DTEND", &interval.end, tzid).write_to(out);
    ContentLine::text("SUMMARY", &event.title).write_to(out);

    // Optional fields are left out entirely rather than written empty
    if let Some(description) = event.description() {
        ContentLine::text("DESCRIPTION", description).write_to(out);
    }
    if let Some(location) = event.location() {
        ContentLine::text("LOCATION", location).write_to(out);
    }

    ContentLine::new("END", "VEVENT").write_to(out);
    Ok(())
}

/// Datetime property with a TZID parameter
fn zoned_datetime_line<'a>(
    name: &'a str,
    datetime: &NaiveDateTime,
    tzid: &'a str,
) -> ContentLine<'a> {
    ContentLine::owned(name, datetime.format(ICS_LOCAL_FORMAT).to_string()).param("TZID", tzid)
}
