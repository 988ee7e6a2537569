use crate::converter::{
    ConversionOutcome, ConvertError, Converter, ReportDocument, StepKind, convert, group_by_path,
    output_file_name, sanitize_base_name,
};
use crate::parser::split_lines;
use crate::report::{Event, Family, Message};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

fn message(path: &str, line: u32, description: &str) -> Message {
    Message::new(
        description,
        "ThreadSanitizer",
        vec![
            Event::new(path, line, 1, format!("#0 f {path}:{line}:1")),
            Event::new("", 0, 0, "#1 <null> <null>"),
        ],
        vec![Event::new(path, line, 1, "raw trace")],
    )
    .unwrap()
}

fn tsan_block(path: &str, line: u32) -> String {
    format!(
        "==1==WARNING: ThreadSanitizer: data race at {path}:{line}\n    #0 worker {path}:{line}:5 (exe+0x1)\n    #1 start_thread (libc.so.6+0x2)\n\n"
    )
}

fn read_document(path: &Path) -> ReportDocument {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}

// ========================================================================
// Grouping Tests
// ========================================================================

#[test]
fn test_group_by_path_keeps_order() {
    let messages = vec![
        message("/src/a.c", 1, "first"),
        message("/src/b.c", 2, "second"),
        message("/src/a.c", 3, "third"),
    ];

    let groups = group_by_path(messages);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].path, "/src/a.c");
    assert_eq!(groups[1].path, "/src/b.c");

    let descriptions: Vec<&str> = groups[0]
        .messages
        .iter()
        .map(|m| m.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["first", "third"]);
}

#[test]
fn test_group_by_path_empty() {
    assert!(group_by_path(Vec::new()).is_empty());
}

// ========================================================================
// Document Tests
// ========================================================================

#[test]
fn test_document_from_group() {
    let groups = group_by_path(vec![message("/src/a.c", 7, "data race")]);
    let document = ReportDocument::from_group(&groups[0], Family::ThreadSanitizer);

    assert_eq!(document.metadata.analyzer.name, "tsan");
    assert_eq!(document.metadata.generated_by.name, "report-converter");
    assert_eq!(document.diagnostics.len(), 1);

    let diagnostic = &document.diagnostics[0];
    assert_eq!(diagnostic.description, "data race");
    assert_eq!(diagnostic.category, "data race");
    assert_eq!(diagnostic.checker_name, "ThreadSanitizer");
    assert_eq!(diagnostic.location.file, "/src/a.c");
    assert_eq!(diagnostic.location.line, 7);

    let kinds: Vec<StepKind> = diagnostic.path.iter().map(|step| step.kind).collect();
    assert_eq!(kinds, vec![StepKind::Primary, StepKind::Narrative]);
    assert_eq!(diagnostic.path[1].location.file, "");
    assert_eq!(diagnostic.notes.len(), 1);
    assert_eq!(diagnostic.notes[0].message, "raw trace");
}

#[test]
fn test_document_json_field_names() {
    let groups = group_by_path(vec![message("/src/a.c", 7, "data race")]);
    let document = ReportDocument::from_group(&groups[0], Family::ThreadSanitizer);
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["formatVersion"], 1);
    assert_eq!(value["metadata"]["generatedBy"]["name"], "report-converter");
    assert!(value["metadata"]["analyzer"].get("version").is_none());

    let diagnostic = &value["diagnostics"][0];
    assert_eq!(diagnostic["checkerName"], "ThreadSanitizer");
    assert_eq!(diagnostic["location"]["column"], 1);
    assert_eq!(diagnostic["path"][0]["kind"], "primary");
    assert_eq!(diagnostic["path"][1]["kind"], "narrative");
    assert_eq!(diagnostic["notes"][0]["location"]["file"], "/src/a.c");
}

#[test]
fn test_linter_category_from_checker() {
    let message = Message::new(
        "use nullptr",
        "modernize-use-nullptr",
        vec![Event::new("/src/a.cpp", 4, 12, "use nullptr")],
        Vec::new(),
    )
    .unwrap();
    let groups = group_by_path(vec![message]);
    let document = ReportDocument::from_group(&groups[0], Family::ClangTidy);

    assert_eq!(document.diagnostics[0].category, "modernize");
    assert!(document.diagnostics[0].notes.is_empty());
}

// ========================================================================
// Naming Tests
// ========================================================================

#[test]
fn test_output_file_name_shape() {
    let name = output_file_name("/src/main.c", Family::AddressSanitizer);

    assert!(name.starts_with("main.c_"));
    assert!(name.ends_with("_asan.json"));
    // base name, 16 hex digits, tool name
    assert_eq!(name.len(), "main.c_".len() + 16 + "_asan.json".len());
}

#[test]
fn test_output_file_name_distinguishes_same_base_name() {
    let a = output_file_name("/src/a/util.c", Family::ClangTidy);
    let b = output_file_name("/src/b/util.c", Family::ClangTidy);

    assert_ne!(a, b);
    assert_eq!(a, output_file_name("/src/a/util.c", Family::ClangTidy));
}

#[test]
fn test_sanitize_base_name() {
    let cases = vec![
        ("/src/main.c", "main.c"),
        ("C:\\work\\proj\\main.cpp", "main.cpp"),
        ("/src/dir/", "dir"),
        ("/src/my file (1).c", "my_file__1_.c"),
        ("", "unknown"),
        ("..", "unknown"),
        ("/", "unknown"),
    ];

    for (path, expected) in cases {
        assert_eq!(sanitize_base_name(path), expected, "Failed for {}", path);
    }
}

// ========================================================================
// Conversion Tests
// ========================================================================

#[test]
fn test_convert_one_file_per_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports");
    let text = format!(
        "{}{}{}",
        tsan_block("/src/a.c", 3),
        tsan_block("/src/b.c", 8),
        tsan_block("/src/a.c", 21)
    );

    let outcome = convert(&split_lines(&text), Family::ThreadSanitizer, &out, false).unwrap();

    let ConversionOutcome::Written(files) = outcome else {
        panic!("expected written files");
    };
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], out.join(output_file_name("/src/a.c", Family::ThreadSanitizer)));
    assert_eq!(dir_entries(&out).len(), 2);

    let first = read_document(&files[0]);
    let lines: Vec<u32> = first.diagnostics.iter().map(|d| d.location.line).collect();
    assert_eq!(lines, vec![3, 21]);
    assert!(first.diagnostics.iter().all(|d| d.location.file == "/src/a.c"));

    let second = read_document(&files[1]);
    assert_eq!(second.diagnostics.len(), 1);
    assert_eq!(second.diagnostics[0].location.file, "/src/b.c");
}

#[test]
fn test_convert_note_holds_raw_trace() {
    let dir = tempfile::tempdir().unwrap();
    let block = tsan_block("/src/a.c", 3);

    let outcome = convert(&split_lines(&block), Family::ThreadSanitizer, dir.path(), false).unwrap();
    let ConversionOutcome::Written(files) = outcome else {
        panic!("expected written files");
    };

    let document = read_document(&files[0]);
    let expected: String = block.lines().skip(1).take(2).map(|l| format!("{l}\n")).collect();
    assert_eq!(document.diagnostics[0].notes[0].message, expected);
}

#[test]
fn test_convert_nothing_found() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports");
    let lines = split_lines("compiling...\nall tests passed\n");

    let outcome = convert(&lines, Family::AddressSanitizer, &out, true).unwrap();

    assert_eq!(outcome, ConversionOutcome::NothingFound);
    assert!(!out.exists());
}

#[test]
fn test_clean_removes_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_path_buf();
    fs::write(out.join("stale.plist"), "old").unwrap();
    fs::create_dir(out.join("nested")).unwrap();

    let outcome = Converter::new(Family::ThreadSanitizer, &out)
        .clean(true)
        .run(&split_lines(&tsan_block("/src/a.c", 3)))
        .unwrap();

    let ConversionOutcome::Written(files) = outcome else {
        panic!("expected written files");
    };
    assert_eq!(dir_entries(&out), files);
}

#[test]
fn test_without_clean_previous_contents_stay() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("stale.plist"), "old").unwrap();

    convert(
        &split_lines(&tsan_block("/src/a.c", 3)),
        Family::ThreadSanitizer,
        dir.path(),
        false,
    )
    .unwrap();

    assert_eq!(dir_entries(dir.path()).len(), 2);
    assert!(dir.path().join("stale.plist").exists());
}

#[test]
fn test_convert_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let lines = split_lines(&format!("{}{}", tsan_block("/x/a.c", 1), tsan_block("/y/a.c", 2)));

    convert(&lines, Family::ThreadSanitizer, first.path(), false).unwrap();
    convert(&lines, Family::ThreadSanitizer, second.path(), false).unwrap();

    let names = |dir: &Path| -> Vec<String> {
        dir_entries(dir)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    };
    assert_eq!(names(first.path()), names(second.path()));
    assert_eq!(names(first.path()).len(), 2);

    for name in names(first.path()) {
        let a = fs::read_to_string(first.path().join(&name)).unwrap();
        let b = fs::read_to_string(second.path().join(&name)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let result = convert(
        &split_lines(&tsan_block("/src/a.c", 3)),
        Family::ThreadSanitizer,
        &blocker,
        false,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to create output directory"));
}

#[test]
fn test_failed_persist_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(output_file_name("/src/a.c", Family::ThreadSanitizer));
    fs::create_dir(&target).unwrap();

    let result = convert(
        &split_lines(&tsan_block("/src/a.c", 3)),
        Family::ThreadSanitizer,
        dir.path(),
        false,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, ConvertError::Persist { ref path, .. } if *path == target));
    assert_eq!(dir_entries(dir.path()), vec![target.clone()]);
    assert!(fs::read_dir(&target).unwrap().next().is_none());
}

#[test]
fn test_unknown_family_converts_into_convert_error() {
    let err: ConvertError = "cppcheck".parse::<Family>().unwrap_err().into();

    assert!(matches!(err, ConvertError::UnknownFamily(_)));
    assert_eq!(err.to_string(), "Unknown report type: cppcheck");
}
