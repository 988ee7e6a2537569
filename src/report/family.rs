use super::UnknownFamily;
use std::fmt;
use std::str::FromStr;

/// Upstream tool whose console output is being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// clang-tidy single-line warnings
    ClangTidy,
    AddressSanitizer,
    MemorySanitizer,
    UndefinedBehaviorSanitizer,
    /// Data race reports
    ThreadSanitizer,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::ClangTidy,
        Family::AddressSanitizer,
        Family::MemorySanitizer,
        Family::UndefinedBehaviorSanitizer,
        Family::ThreadSanitizer,
    ];

    /// Selector used on the command line and in output file names
    pub fn tool_name(self) -> &'static str {
        match self {
            Family::ClangTidy => "clang-tidy",
            Family::AddressSanitizer => "asan",
            Family::MemorySanitizer => "msan",
            Family::UndefinedBehaviorSanitizer => "ubsan",
            Family::ThreadSanitizer => "tsan",
        }
    }

    /// Literal name a sanitizer prints in its `==pid==` header
    ///
    /// `None` for the linter, which has no such header.
    pub fn header_name(self) -> Option<&'static str> {
        match self {
            Family::ClangTidy => None,
            Family::AddressSanitizer => Some("AddressSanitizer"),
            Family::MemorySanitizer => Some("MemorySanitizer"),
            Family::UndefinedBehaviorSanitizer => Some("UndefinedBehaviorSanitizer"),
            Family::ThreadSanitizer => Some("ThreadSanitizer"),
        }
    }

    /// Report category for a checker of this family
    pub fn category(self, checker_name: &str) -> String {
        match self {
            Family::ClangTidy => checker_category(checker_name),
            Family::AddressSanitizer | Family::MemorySanitizer => "memory error".to_string(),
            Family::UndefinedBehaviorSanitizer => "undefined behaviour".to_string(),
            Family::ThreadSanitizer => "data race".to_string(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.tool_name() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

/// Category of a linter checker: the text before the first `-`
///
/// Names without a `-` separator (or with an empty prefix) fall back to
/// `"unknown"`.
pub fn checker_category(checker_name: &str) -> String {
    match checker_name.split_once('-') {
        Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
        _ => "unknown".to_string(),
    }
}
