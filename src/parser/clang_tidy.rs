use super::cursor::{Line, LineCursor};
use super::result::Recognition;
use crate::report::{Event, Message};
use regex::Regex;
use std::sync::LazyLock;

/// clang-tidy diagnostic line:
/// `/src/a.cpp:12:3: warning: use nullptr [modernize-use-nullptr]`
///
/// Notes, code excerpts and caret lines never match.
static DIAGNOSTIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<path>[\S ]+?):",
        r"(?P<line>\d+):",
        r"(?P<column>\d+): ",
        r"(?P<severity>error|warning):",
        r"(?P<message>[\S \t]+?)\s*",
        r"\[(?P<checker>[^\[\]]*)\]\s*$",
    ))
    .expect("Invalid clang-tidy diagnostic regex")
});

/// Read one clang-tidy diagnostic from the current line
///
/// A match consumes exactly that line and yields a message with a single
/// event and no notes.
pub fn recognize(cursor: &mut LineCursor<'_>) -> Recognition {
    let Line::Text(line) = cursor.current() else {
        return Recognition::NoMatch;
    };
    let Some(caps) = DIAGNOSTIC_REGEX.captures(line) else {
        return Recognition::NoMatch;
    };

    let (Some(line_no), Some(column)) = (
        caps["line"].parse::<u32>().ok(),
        caps["column"].parse::<u32>().ok(),
    ) else {
        return Recognition::NoMatch;
    };

    let path = &caps["path"];
    let message = caps["message"].trim();
    let checker = caps["checker"].trim();

    let event = Event::new(path, line_no, column, message);
    cursor.advance();

    match Message::new(message, checker, vec![event], Vec::new()) {
        Some(message) => Recognition::Matched(message),
        None => Recognition::Discarded,
    }
}
