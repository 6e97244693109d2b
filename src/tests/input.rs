use super::{build_file, find_documents, load_elements, parse_elements};
use crate::builder::BuildOptions;
use crate::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_parse_json_array() {
    let json = r#"[
        {"type": "Title", "element_id": "a", "text": "A", "metadata": {"category_depth": 0}},
        {"type": "NarrativeText", "element_id": "b", "text": "B", "metadata": {"parent_id": "a"}}
    ]"#;

    let elements = parse_elements(json).unwrap();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].category.as_deref(), Some("Title"));
    assert_eq!(elements[1].metadata.parent_id.as_deref(), Some("a"));
}

#[test]
fn test_parse_json_lines() {
    let json = r#"{"type": "Title", "element_id": "a", "text": "A", "metadata": {"category_depth": 0}}

{"type": "NarrativeText", "element_id": "b", "text": "B"}"#;

    let elements = parse_elements(json).unwrap();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].text, "B");
}

#[test]
fn test_broken_array_is_error() {
    let result = parse_elements(r#"[{"type": "Title"},"#);
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_broken_json_line_reports_line() {
    let json = "{\"type\": \"Title\"}\n{not json}\n";
    let result = parse_elements(json);
    assert!(matches!(result, Err(Error::JsonLine { line: 2, .. })));
}

#[test]
fn test_load_elements_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"type": "NarrativeText", "text": "hello"}}]"#).unwrap();

    let elements = load_elements(file.path()).unwrap();
    assert_eq!(elements[0].text, "hello");
}

#[test]
fn test_load_missing_file_names_path() {
    let path = PathBuf::from("/definitely/not/here.json");
    let err = load_elements(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_parse_failure_names_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"type": "Title"}},"#).unwrap();

    let err = load_elements(file.path()).unwrap_err();

    match &err {
        Error::InFile { path, source } => {
            assert_eq!(path, file.path());
            assert!(matches!(**source, Error::Json(_)));
        }
        other => panic!("expected InFile, got {other:?}"),
    }
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_build_failure_names_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"id": "x", "text": "no category"}}]"#).unwrap();

    let err = build_file(file.path(), &BuildOptions::default()).unwrap_err();

    assert!(matches!(
        &err,
        Error::InFile { source, .. } if matches!(**source, Error::MissingCategory { index: 0 })
    ));
    let message = err.to_string();
    assert!(message.contains(&file.path().display().to_string()));
    assert!(message.contains("element #0 has no category"));
}

#[test]
fn test_build_file_rejects_oversized_depth() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"type": "Title", "element_id": "h", "text": "H", "metadata": {{"category_depth": 18446744073709551615}}}}"#
    )
    .unwrap();

    let err = build_file(file.path(), &BuildOptions::default()).unwrap_err();

    assert!(matches!(
        &err,
        Error::InFile { source, .. } if matches!(**source, Error::DepthTooLarge { .. })
    ));
}

#[test]
fn test_build_file_returns_tree() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"type": "Title", "element_id": "a", "text": "A", "metadata": {{"category_depth": 0}}}}]"#
    )
    .unwrap();

    let output = build_file(file.path(), &BuildOptions::default()).unwrap();
    assert_eq!(output.tree.node_count(), 2);
}

#[test]
fn test_find_documents_filters_and_sorts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.json"), "[]").unwrap();
    fs::write(dir.path().join("a.ndjson"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.JSON"), "[]").unwrap();

    let explicit = dir.path().join("notes.txt");
    let extensions = vec!["json".to_string(), "ndjson".to_string()];
    let found = find_documents(vec![dir.path().to_path_buf(), explicit.clone()], &extensions).unwrap();

    assert_eq!(
        found,
        vec![
            dir.path().join("a.ndjson"),
            dir.path().join("b.json"),
            dir.path().join("nested").join("c.JSON"),
            explicit,
        ]
    );
}
