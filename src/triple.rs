//! Target architecture lookup in a captured compiler invocation trace.

use regex::Regex;
use std::sync::LazyLock;

/// `-triple <triple>` with either token optionally double-quoted
static TRIPLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)"?-triple"?\s+"?(?P<triple>[^"\s]+)"?"#).expect("Invalid triple regex")
});

/// Architecture of the first `-triple` flag found in `trace`
///
/// The architecture is the part of the triple before its first `-`, so
/// `x86_64-unknown-linux-gnu` gives `x86_64`. Returns `None` if no line
/// carries the flag.
pub fn find_arch_in_command(trace: &str) -> Option<String> {
    trace.lines().find_map(|line| {
        let caps = TRIPLE_REGEX.captures(line)?;
        let triple = caps.name("triple")?.as_str();
        triple.split('-').next().map(str::to_string)
    })
}
