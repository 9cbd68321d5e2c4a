use std::fs;

use tempfile::TempDir;
use tileguide_publish::{diff_guide, publish_guide, write_page, PublishError, WriteResult};

#[test]
fn publish_then_diff_is_clean() {
    let dir = TempDir::new().expect("dir");
    let path = dir.path().join("site").join("index.html");

    let first = publish_guide(&path, None, false).expect("publish");
    assert_eq!(first, WriteResult::Written { path: path.clone() });

    let html = fs::read_to_string(&path).expect("read");
    assert!(html.contains("<span class=\"step-badge\">Step 6</span>"));
    assert!(diff_guide(&path, None).expect("diff").is_none());

    let again = publish_guide(&path, None, false).expect("republish");
    assert_eq!(again, WriteResult::Unchanged { path });
}

#[test]
fn dry_run_publish_leaves_directory_empty() {
    let dir = TempDir::new().expect("dir");
    let path = dir.path().join("index.html");

    let result = publish_guide(&path, None, true).expect("dry-run");
    assert!(matches!(result, WriteResult::WouldWrite { .. }));

    let mut entries = fs::read_dir(dir.path()).expect("read_dir");
    assert!(entries.next().is_none(), "dry-run must not create files");
}

#[test]
fn override_templates_change_the_diff() {
    let dir = TempDir::new().expect("dir");
    let path = dir.path().join("index.html");
    publish_guide(&path, None, false).expect("publish");

    let templates = TempDir::new().expect("templates");
    fs::create_dir_all(templates.path().join("partials")).expect("mkdir");
    fs::write(
        templates.path().join("partials").join("overview.html"),
        "    <section class=\"section\" id=\"overview\"><h2>{{ overview.heading }}</h2></section>\n",
    )
    .expect("write override");

    let diff = diff_guide(&path, Some(templates.path()))
        .expect("diff")
        .expect("override should produce a diff");
    assert!(diff.unified_diff.contains("-      <p>The workflow below mirrors"));
}

#[test]
fn writing_over_a_directory_is_an_io_error() {
    let dir = TempDir::new().expect("dir");
    let err = write_page(dir.path(), "content", false).expect_err("target is a directory");
    match err {
        PublishError::Io { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("expected Io error, got: {other}"),
    }
}
