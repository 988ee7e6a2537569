mod clang_tidy;
mod cursor;
mod registry;
mod result;
mod sanitizer;
mod stack_trace;


pub use cursor::{Line, LineCursor, split_lines};
pub use registry::recognize;
pub use result::Recognition;
pub use stack_trace::{StackTrace, parse_frame, parse_stack_trace};

use crate::report::{Family, Message};
use tracing::debug;

/// Extract every report of `family` from captured tool output
///
/// Lines that do not start a report are skipped. A candidate that is
/// discarded leaves its terminating line unconsumed, so that line gets a
/// fresh attempt.
pub fn parse_messages(lines: &[String], family: Family) -> Vec<Message> {
    let mut cursor = LineCursor::new(lines);
    let mut messages = Vec::new();

    while !cursor.is_at_end() {
        match recognize(family, &mut cursor) {
            Recognition::Matched(message) => messages.push(message),
            Recognition::Discarded => {}
            Recognition::NoMatch => {
                cursor.advance();
            }
        }
    }

    debug!("Parsed {} '{}' messages from {} lines", messages.len(), family, lines.len());
    messages
}
