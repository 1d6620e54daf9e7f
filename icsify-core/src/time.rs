//! Time expression resolution.
//!
//! Turns a calendar date plus a loose time expression into concrete
//! start/end timestamps. Accepted expressions:
//! - a range: `09:00-10:00`
//! - a start time only: `14:30` (the event lasts `DEFAULT_DURATION_MINUTES`)
//! - a named period: `morning`, `evening`, `tbd`, `all day` (case-insensitive)
//!
//! Timestamps are naive local times. The timezone is attached later, when
//! the calendar file is written.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{IcsifyError, IcsifyResult};

/// Length of an event whose time expression names only a start.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// A named part of the day that stands in for an explicit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// 09:00-12:00
    Morning,
    /// 18:00-22:00
    Evening,
    /// 09:00-17:00, used for both `tbd` and `all day`
    AllDay,
}

impl TimeOfDay {
    /// Look up a named period. Surrounding whitespace and case are ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "evening" => Some(TimeOfDay::Evening),
            "tbd" | "all day" => Some(TimeOfDay::AllDay),
            _ => None,
        }
    }

    /// The explicit range this period expands to.
    pub fn as_range(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "09:00-12:00",
            TimeOfDay::Evening => "18:00-22:00",
            TimeOfDay::AllDay => "09:00-17:00",
        }
    }
}

/// Concrete start and end of an event, in naive local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ResolvedInterval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the end lies before the start.
    ///
    /// Ranges never roll over midnight, so `22:00-02:00` ends at 02:00 on the
    /// same date, 20 hours before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

/// Resolve `expr` on `date` into a start/end pair.
pub fn resolve(date: NaiveDate, expr: &str) -> IcsifyResult<ResolvedInterval> {
    let expanded = match TimeOfDay::from_token(expr) {
        Some(period) => period.as_range(),
        None => expr,
    };

    let (start_part, end_part) = match expanded.split_once('-') {
        Some((start, end)) => (start, Some(end)),
        None => (expanded, None),
    };

    let start = clock_time(start_part, expr)?.on(date, expr)?;

    // "09:00-" has no usable end, same as "09:00"
    let end = match end_part.filter(|part| !part.trim().is_empty()) {
        Some(part) => clock_time(part, expr)?.on(date, expr)?,
        None => start
            .checked_add_signed(Duration::minutes(DEFAULT_DURATION_MINUTES))
            .ok_or_else(|| IcsifyError::InvalidTimeFormat(expr.to_string()))?,
    };

    Ok(ResolvedInterval { start, end })
}

/// Like [`resolve`], with the date given as `YYYY-MM-DD` text.
pub fn resolve_str(date: &str, expr: &str) -> IcsifyResult<ResolvedInterval> {
    resolve(parse_date(date)?, expr)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> IcsifyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| IcsifyError::InvalidDate(s.to_string()))
}

/// Hour and minute read from one side of a range.
#[derive(Debug, Clone, Copy)]
struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Place this time on `date`. `24:00` is midnight at the end of the day.
    fn on(self, date: NaiveDate, expr: &str) -> IcsifyResult<NaiveDateTime> {
        let datetime = if self.hour == 24 {
            date.succ_opt().and_then(|next| next.and_hms_opt(0, 0, 0))
        } else {
            date.and_hms_opt(self.hour, self.minute, 0)
        };

        datetime.ok_or_else(|| IcsifyError::InvalidTimeFormat(expr.to_string()))
    }
}

/// Read `HH:MM` from `part`. Anything after a second `:` (seconds) is ignored.
/// `expr` is the caller's original expression, used in the error.
fn clock_time(part: &str, expr: &str) -> IcsifyResult<ClockTime> {
    let invalid = || IcsifyError::InvalidTimeFormat(expr.to_string());

    let mut fields = part.split(':');
    let hour = fields.next().and_then(number).ok_or_else(invalid)?;
    let minute = fields.next().and_then(number).ok_or_else(invalid)?;

    if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
        return Err(invalid());
    }

    Ok(ClockTime { hour, minute })
}

fn number(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
