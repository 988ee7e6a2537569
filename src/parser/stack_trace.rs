use super::cursor::{Line, LineCursor};
use crate::report::Event;
use regex::Regex;
use std::sync::LazyLock;

/// Indented frame ordinal, e.g. `    #3 0x4c2f1b in main /src/a.c:5:3`
static FRAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+#\d+").expect("Invalid frame regex"));

/// Start of the next sanitizer report, e.g. `==7==ERROR: AddressSanitizer: ...`
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^==\d+==(ERROR|WARNING): \w+: ").expect("Invalid report header regex")
});

/// `path:line` with an optional `:column`
static LOCATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<path>\S+?):(?P<line>\d+)(:(?P<column>\d+))?").expect("Invalid location regex")
});

/// Frames consumed from one contiguous block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTrace {
    /// Consumed lines, verbatim and concatenated
    pub raw: String,
    /// One event per frame, top frame first
    pub events: Vec<Event>,
}

impl StackTrace {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Consume the report block starting at the cursor's current line
///
/// Every line up to the next blank line, report header or end of input is
/// kept verbatim in the raw text. Only frame lines produce events. The line
/// that ends the block is left under the cursor.
pub fn parse_stack_trace(cursor: &mut LineCursor<'_>) -> StackTrace {
    let mut trace = StackTrace::default();

    while let Line::Text(line) = cursor.current() {
        if line.trim().is_empty() || HEADER_REGEX.is_match(line) {
            break;
        }

        if FRAME_REGEX.is_match(line) {
            trace.events.push(parse_frame(line));
        }

        trace.raw.push_str(line);
        cursor.advance();
    }

    trace
}

/// Turn one frame line into an event
///
/// Frames without a source location (system libraries, stripped binaries)
/// keep an empty path and zero line/column.
pub fn parse_frame(line: &str) -> Event {
    let message = line.trim();

    let Some(caps) = LOCATION_REGEX.captures(message) else {
        return Event::new("", 0, 0, message);
    };

    let path = caps.name("path").map_or("", |m| m.as_str());
    let line_no = caps
        .name("line")
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let column = caps
        .name("column")
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    Event::new(path, line_no, column, message)
}
