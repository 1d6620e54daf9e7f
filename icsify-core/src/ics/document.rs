//! A generated calendar file.

use std::fmt;

/// The output of one serialization pass.
///
/// The download body and the on-screen preview are two views of the same
/// buffer, so they always carry identical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsDocument {
    text: String,
    event_count: usize,
}

impl IcsDocument {
    pub const MIME_TYPE: &'static str = "text/calendar";
    pub const FILE_EXTENSION: &'static str = "ics";
    pub const DEFAULT_FILENAME: &'static str = "events.ics";

    pub(crate) fn new(text: String, event_count: usize) -> Self {
        IcsDocument { text, event_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text for a preview panel. Needs no further transformation.
    pub fn preview(&self) -> &str {
        &self.text
    }

    /// Body for a `.ics` download.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of VEVENT blocks in the document.
    pub fn event_count(&self) -> usize {
        self.event_count
    }
}

impl fmt::Display for IcsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
