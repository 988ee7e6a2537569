use super::cursor::{Line, LineCursor};
use super::result::Recognition;
use super::stack_trace::parse_stack_trace;
use crate::report::{Event, Family, Message};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Header grammar of one sanitizer
#[derive(Debug)]
pub struct SanitizerGrammar {
    /// Literal tool name in the header, also used as checker name
    pub name: &'static str,
    header: Regex,
}

/// Grammars of every sanitizer family, built from their header names
static GRAMMARS: LazyLock<Vec<(Family, SanitizerGrammar)>> = LazyLock::new(|| {
    Family::ALL
        .into_iter()
        .filter_map(|family| Some((family, SanitizerGrammar::new(family.header_name()?))))
        .collect()
});

/// Grammar for `family`, `None` for the linter
pub fn grammar(family: Family) -> Option<&'static SanitizerGrammar> {
    GRAMMARS
        .iter()
        .find(|(candidate, _)| *candidate == family)
        .map(|(_, grammar)| grammar)
}

impl SanitizerGrammar {
    /// Compile the `==<pid>==ERROR: <name>: <message>` header pattern
    fn new(name: &'static str) -> Self {
        let pattern = format!(
            r"^==(?P<pid>\d+)==(?P<severity>ERROR|WARNING): {name}: (?P<message>[\S \t]+)"
        );
        Self {
            name,
            header: Regex::new(&pattern).expect("Invalid sanitizer header regex"),
        }
    }

    /// Try to read one sanitizer report starting at the cursor
    ///
    /// The first frame of the trace becomes the primary location. The whole
    /// trace is kept verbatim as a single note.
    pub fn recognize(&self, cursor: &mut LineCursor<'_>) -> Recognition {
        let Line::Text(line) = cursor.current() else {
            return Recognition::NoMatch;
        };
        let Some(caps) = self.header.captures(line) else {
            return Recognition::NoMatch;
        };
        let description = caps.name("message").map_or("", |m| m.as_str().trim());

        cursor.advance();
        let trace = parse_stack_trace(cursor);

        let notes = match trace.events.first() {
            Some(top) => vec![Event::new(top.path.clone(), top.line, top.column, trace.raw)],
            None => Vec::new(),
        };

        match Message::new(description, self.name, trace.events, notes) {
            Some(message) => Recognition::Matched(message),
            None => {
                debug!(
                    "Discarding {} report without stack frames: {}",
                    self.name, description
                );
                Recognition::Discarded
            }
        }
    }
}
