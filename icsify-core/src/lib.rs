//! Core of icsify: turn loosely-entered event details into a calendar file.
//!
//! - `time` resolves a date plus a time expression (`"09:00-10:00"`,
//!   `"14:30"`, `"morning"`, ...) into concrete start/end timestamps
//! - `ics` serializes a batch of `EventRecord`s into one RFC 5545 document
//! - `config` holds user settings such as the default timezone

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod time;

pub use error::{IcsifyError, IcsifyResult};
pub use event::{EventBatch, EventRecord};
pub use ics::{IcsDocument, serialize};
pub use time::{ResolvedInterval, TimeOfDay, resolve, resolve_str};
