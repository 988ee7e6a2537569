use crate::report::Message;

/// Outcome of trying one family grammar at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// A report was extracted; the cursor sits on the first line after it
    Matched(Message),
    /// The header matched but nothing usable followed it
    ///
    /// The cursor sits on the first line that ended the candidate block. That
    /// line was not consumed and must be tried again as a fresh candidate.
    Discarded,
    /// The current line does not start a report; the cursor was not moved
    NoMatch,
}
