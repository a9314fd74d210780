use super::{find_documents, Document, LineEnding};
use crate::error::Error;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_text_round_trip_preserves_terminators() {
    for text in [
        "# A\nbody\n",
        "# A\r\nbody\r\n",
        "# A\nbody",
        "",
        "\n",
        "a\n\n",
        "# A\r\nbody\n# B\n",
        "a\nb\r\nc",
    ] {
        assert_eq!(Document::from_text(text).to_text(), text, "text {text:?}");
    }
}

#[test]
fn test_mixed_terminators_kept_per_line() {
    let doc = Document::from_text("# A\r\nbody\n# B");
    assert_eq!(doc.lines, vec!["# A", "body", "# B"]);
    assert_eq!(
        doc.endings,
        vec![LineEnding::CrLf, LineEnding::Lf, LineEnding::None]
    );
}

#[test]
fn test_appended_lines_use_lf() {
    let mut doc = Document::from_text("# A\r\n");
    doc.lines.push("# B".to_string());
    assert_eq!(doc.to_text(), "# A\r\n# B\n");
}

#[test]
fn test_load_and_save() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Hello\n\n## World\n").unwrap();

    let mut doc = Document::load(file.path()).unwrap();
    assert_eq!(doc.lines, vec!["# Hello", "", "## World"]);
    assert_eq!(doc.endings, vec![LineEnding::Lf; 3]);

    doc.lines[0] = "# 1. Hello".to_string();
    doc.save(file.path()).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "# 1. Hello\n\n## World\n");
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = Document::load(&dir.path().join("absent.md")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "got {err:?}");
}

#[test]
fn test_find_documents_filters_by_extension() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("docs");
    fs::create_dir(&nested).unwrap();
    fs::create_dir(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join("README.md"), "# Readme").unwrap();
    fs::write(nested.join("guide.md"), "# Guide").unwrap();
    fs::write(nested.join("notes.txt"), "# Notes").unwrap();
    fs::write(dir.path().join(".hidden").join("secret.md"), "# Secret").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(
        found,
        vec![dir.path().join("README.md"), nested.join("guide.md")]
    );
}

#[test]
fn test_find_documents_accepts_dotted_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.markdown"), "# A").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &[".markdown".to_string()]).unwrap();

    assert_eq!(found, vec![dir.path().join("a.markdown")]);
}

#[test]
fn test_explicit_files_always_included() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("outline.txt");
    fs::write(&path, "# A").unwrap();

    let found = find_documents(vec![path.clone(), path.clone()], &["md".to_string()]).unwrap();

    assert_eq!(found, vec![path]);
}

#[test]
fn test_find_documents_missing_path() {
    let dir = tempdir().unwrap();
    let result = find_documents(vec![dir.path().join("nope")], &["md".to_string()]);
    assert!(matches!(result, Err(Error::Read { .. })));
}
