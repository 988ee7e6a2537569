/// A single point in a diagnostic narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Source file, empty when the tool did not report one
    pub path: String,
    /// 1-based line, 0 when unknown
    pub line: u32,
    /// 1-based column, 0 when unknown
    pub column: u32,
    /// Human-readable text for this step
    pub message: String,
}

impl Event {
    pub fn new(path: impl Into<String>, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// One reported defect
///
/// The primary location (`path`, `line`, `column`) always mirrors the first
/// event. Construction goes through [`Message::new`], which refuses an empty
/// event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub path: String,
    pub line: u32,
    pub column: u32,
    /// Diagnostic text as emitted by the tool
    pub description: String,
    /// Rule or tool identifier, format depends on the family
    pub checker_name: String,
    /// Ordered narrative, top frame first for stack traces
    pub events: Vec<Event>,
    /// Auxiliary annotations (raw trace text for sanitizer reports)
    pub notes: Vec<Event>,
}

impl Message {
    /// Build a message anchored at the first event
    ///
    /// Returns `None` if `events` is empty.
    pub fn new(
        description: impl Into<String>,
        checker_name: impl Into<String>,
        events: Vec<Event>,
        notes: Vec<Event>,
    ) -> Option<Self> {
        let first = events.first()?;

        Some(Self {
            path: first.path.clone(),
            line: first.line,
            column: first.column,
            description: description.into(),
            checker_name: checker_name.into(),
            events,
            notes,
        })
    }
}
