//! ICS file generation.
//!
//! This module writes calendar files according to RFC 5545: one VCALENDAR
//! holding one VEVENT per exported event.

mod content_line;
mod document;
mod generate;

pub use document::IcsDocument;
pub use generate::{ICS_LOCAL_FORMAT, serialize};
