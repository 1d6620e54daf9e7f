//! Single content lines: `NAME;PARAM=value:VALUE` followed by CRLF.

use std::borrow::Cow;

/// Maximum physical line length in octets, continuation space included.
const MAX_LINE_OCTETS: usize = 75;

/// One property line of an ICS document.
#[derive(Debug, Clone)]
pub struct ContentLine<'a> {
    name: &'a str,
    params: Vec<(&'a str, &'a str)>,
    value: Cow<'a, str>,
}

impl<'a> ContentLine<'a> {
    /// A line whose value is written exactly as given.
    pub fn new(name: &'a str, value: &'a str) -> Self {
        ContentLine {
            name,
            params: Vec::new(),
            value: Cow::Borrowed(value),
        }
    }

    /// A line with a TEXT value, escaped per RFC 5545 section 3.3.11.
    pub fn text(name: &'a str, value: &'a str) -> Self {
        ContentLine {
            name,
            params: Vec::new(),
            value: escape_text(value),
        }
    }

    /// A line with an owned value (e.g. a formatted timestamp).
    pub fn owned(name: &'a str, value: String) -> Self {
        ContentLine {
            name,
            params: Vec::new(),
            value: Cow::Owned(value),
        }
    }

    /// Append a parameter. The value is written verbatim, in double quotes
    /// when it contains `:`, `;` or `,`.
    pub fn param(mut self, key: &'a str, value: &'a str) -> Self {
        self.params.push((key, value));
        self
    }

    /// Append the folded line and its CRLF terminator to `out`.
    pub fn write_to(&self, out: &mut String) {
        let mut line = String::with_capacity(self.name.len() + self.value.len() + 1);
        line.push_str(self.name);
        for (key, value) in &self.params {
            line.push(';');
            line.push_str(key);
            line.push('=');
            if value.contains([':', ';', ',']) {
                line.push('"');
                line.push_str(value);
                line.push('"');
            } else {
                line.push_str(value);
            }
        }
        line.push(':');
        line.push_str(&self.value);

        out.push_str(&fold_line(&line));
        out.push_str("\r\n");
    }
}

/// Parameter values cannot carry control characters or DQUOTE, quoted or not.
pub(crate) fn param_value_is_valid(value: &str) -> bool {
    !value.chars().any(|c| c.is_control() || c == '"')
}

/// Escape a TEXT value: backslash, semicolon, comma and newlines.
/// Bare carriage returns are dropped.
pub(crate) fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', ';', ',', '\n', '\r']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Fold a line longer than 75 octets by inserting CRLF + space.
/// Splits only at UTF-8 character boundaries.
pub(crate) fn fold_line(line: &str) -> Cow<'_, str> {
    if line.len() <= MAX_LINE_OCTETS {
        return Cow::Borrowed(line);
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;

    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += len;
    }

    Cow::Owned(folded)
}
