//! Generated documents must read back cleanly with an independent
//! RFC 5545 parser.

use chrono::NaiveDate;
use icalendar::parser::{read_calendar, unfold};
use icsify_core::{EventBatch, EventRecord, serialize};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
}

#[test]
fn test_batch_from_json_reads_back() {
    let json = r#"{"events": [
        {"title": "Batch 20 Kick Off & Orientation", "date": "2025-05-05", "time": "09:15-18:00",
         "description": "Welcome to SkyDeck!", "location": "Berkeley"},
        {"title": "Campus Tour & Lunch", "date": "2025-05-06", "time": "11:15-13:00"},
        {"title": "Demo prep", "date": "2025-05-07", "time": "TBD"}
    ]}"#;

    let batch = EventBatch::from_json(json).unwrap();
    let doc = serialize(&batch.events, "America/Los_Angeles").unwrap();

    let unfolded = unfold(doc.as_str());
    let calendar = read_calendar(&unfolded).expect("generated ICS should parse");

    let vevents: Vec<_> = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .collect();
    assert_eq!(vevents.len(), 3);

    let summaries: Vec<String> = vevents
        .iter()
        .map(|c| c.find_prop("SUMMARY").unwrap().val.to_string())
        .collect();
    assert_eq!(
        summaries,
        vec![
            "Batch 20 Kick Off & Orientation",
            "Campus Tour & Lunch",
            "Demo prep"
        ]
    );

    let starts: Vec<String> = vevents
        .iter()
        .map(|c| c.find_prop("DTSTART").unwrap().val.to_string())
        .collect();
    assert_eq!(
        starts,
        vec!["20250505T091500", "20250506T111500", "20250507T090000"]
    );

    assert!(vevents[0].find_prop("LOCATION").is_some());
    assert!(vevents[1].find_prop("LOCATION").is_none());
    assert!(vevents[2].find_prop("DESCRIPTION").is_none());
}

#[test]
fn test_long_description_unfolds_to_original() {
    let description = "Welcome to SkyDeck! During this event we will introduce you to \
        SkyDeck staff and your fellow founders and get you familiar with upcoming \
        SkyDeck programming";
    let event = EventRecord::new("Kick Off", date(), "morning").with_description(description);
    let doc = serialize(&[event], "UTC").unwrap();

    assert!(
        doc.as_str().split("\r\n").all(|line| line.len() <= 75),
        "every physical line should be folded to 75 octets. ICS:\n{doc}"
    );

    let unfolded = unfold(doc.as_str());
    let calendar = read_calendar(&unfolded).expect("generated ICS should parse");
    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .expect("VEVENT present");

    assert_eq!(
        vevent.find_prop("DESCRIPTION").unwrap().val.to_string(),
        description
    );
}
