use super::cursor::LineCursor;
use super::result::Recognition;
use super::{clang_tidy, sanitizer};
use crate::report::Family;

/// Try the grammar of `family` at the cursor's current line
///
/// Sanitizer families share one stack-trace grammar; the linter is not
/// stack-trace shaped and has its own.
pub fn recognize(family: Family, cursor: &mut LineCursor<'_>) -> Recognition {
    match sanitizer::grammar(family) {
        Some(grammar) => grammar.recognize(cursor),
        None => clang_tidy::recognize(cursor),
    }
}
