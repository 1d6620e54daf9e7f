//! Event records as handed over by the text-parsing front end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IcsifyError, IcsifyResult};
use crate::time::{ResolvedInterval, resolve};

/// One event to export.
///
/// `time` is kept as the raw expression (`"09:15-18:00"`, `"morning"`, ...)
/// and only resolved when the calendar file is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EventRecord {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: impl Into<String>) -> Self {
        EventRecord {
            title: title.into(),
            date,
            time: time.into(),
            description: None,
            location: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Description to export, or `None` if missing or blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Location to export, or `None` if missing or blank.
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Resolve the event's date and time expression.
    pub fn interval(&self) -> IcsifyResult<ResolvedInterval> {
        resolve(self.date, &self.time)
    }

    /// Check the fields that must be present before export.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// An ordered list of events exported together into one calendar file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<EventRecord>,
}

impl EventBatch {
    /// Parse events from JSON.
    ///
    /// Accepts `{"events": [...]}`, a bare `[...]`, or a single event object.
    pub fn from_json(json: &str) -> IcsifyResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(json_error)?;
        let wrapped = value.get("events").is_some();

        let events = match value {
            Value::Array(_) => serde_json::from_value(value).map_err(json_error)?,
            Value::Object(_) if wrapped => {
                let batch: EventBatch = serde_json::from_value(value).map_err(json_error)?;
                batch.events
            }
            Value::Object(_) => vec![serde_json::from_value(value).map_err(json_error)?],
            _ => {
                return Err(IcsifyError::Json(
                    "expected an event, a list of events, or {\"events\": [...]}".to_string(),
                ));
            }
        };

        Ok(EventBatch { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<EventRecord>> for EventBatch {
    fn from(events: Vec<EventRecord>) -> Self {
        EventBatch { events }
    }
}

fn json_error(err: serde_json::Error) -> IcsifyError {
    IcsifyError::Json(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    #[test]
    fn test_blank_optional_fields_are_treated_as_absent() {
        let event = EventRecord::new("Kick Off", date(), "09:15-18:00")
            .with_description("   ")
            .with_location("");

        assert_eq!(event.description(), None);
        assert_eq!(event.location(), None);

        let event = event.with_location("Berkeley");
        assert_eq!(event.location(), Some("Berkeley"));
    }

    #[test]
    fn test_validate_requires_title() {
        assert!(EventRecord::new("Lunch", date(), "12:00").validate().is_ok());
        assert!(EventRecord::new("", date(), "12:00").validate().is_err());
        assert!(EventRecord::new("  \t", date(), "12:00").validate().is_err());
    }

    #[test]
    fn test_from_json_wrapped_batch() {
        let json = r#"{"events": [
            {"title": "Batch 20 Kick Off", "date": "2025-05-05", "time": "09:15-18:00",
             "description": "Welcome to SkyDeck!", "location": "Berkeley"},
            {"title": "Campus Tour", "date": "2025-05-06", "time": "11:15-13:00"}
        ]}"#;

        let batch = EventBatch::from_json(json).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.events[0].title, "Batch 20 Kick Off");
        assert_eq!(batch.events[0].location.as_deref(), Some("Berkeley"));
        assert_eq!(batch.events[1].date, NaiveDate::from_ymd_opt(2025, 5, 6).unwrap());
        assert_eq!(batch.events[1].description, None);
    }

    #[test]
    fn test_from_json_bare_array_and_single_object() {
        let bare = r#"[{"title": "A", "date": "2025-05-05", "time": "morning"}]"#;
        assert_eq!(EventBatch::from_json(bare).unwrap().len(), 1);

        let single = r#"{"title": "A", "date": "2025-05-05", "time": "morning", "location": null}"#;
        let batch = EventBatch::from_json(single).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.events[0].location, None);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        for json in [
            "not json",
            "42",
            r#"{"title": "A", "date": "May 5", "time": "morning"}"#,
            r#"{"events": [{"title": "A", "time": "morning"}]}"#,
        ] {
            assert!(
                matches!(EventBatch::from_json(json), Err(IcsifyError::Json(_))),
                "expected JSON error for {json}"
            );
        }
    }
}
