use crate::report::Family;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Bytes of the path digest kept in the file name
const DIGEST_BYTES: usize = 8;

/// Output file name for the reports of one source path
///
/// Built as `<base name>_<digest>_<tool>.json`. The digest covers the full
/// source path, so `a/util.c` and `b/util.c` never share a file.
pub fn output_file_name(source_path: &str, family: Family) -> String {
    let digest = Sha256::digest(source_path.as_bytes());
    format!(
        "{}_{}_{}.json",
        sanitize_base_name(source_path),
        hex::encode(&digest[..DIGEST_BYTES]),
        family.tool_name()
    )
}

/// Final component of a reported path, reduced to a portable file name
///
/// Tools report both Unix and Windows style paths, so both separators are
/// honoured. Empty results become `unknown`.
pub fn sanitize_base_name(source_path: &str) -> String {
    let base = source_path
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or_default();

    let base = Path::new(base)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        "unknown".to_string()
    } else {
        sanitized
    }
}
