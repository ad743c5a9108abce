//! # Command Tests
//!
//! Tests for the set, show and list commands against files in a temporary
//! project, with configuration redirected by the test harness.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::path::PathBuf;

use common::{default_markers, TestEnv, CHECKLIST};
use todomark::{
    commands::{self, collect_todos, show, ListArgs, SetArgs},
    Config, Document, Session,
};

fn set_args(status: &str, file: PathBuf, line: usize) -> SetArgs {
    SetArgs {
        status: status.to_string(),
        file,
        line,
    }
}

// =============================================================================
// set
// =============================================================================

#[test]
fn test_set_inserts_marker_and_writes_file() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "# Plan\n- write tests\n");

    commands::set(&set_args("pending", file, 2)).expect("set should succeed");
    assert_eq!(env.read_file("notes.md"), "# Plan\n- (-) write tests\n");
}

#[test]
fn test_set_replaces_marker() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "- (-) write tests\n");

    commands::set(&set_args("done", file, 1)).expect("set should succeed");
    assert_eq!(env.read_file("notes.md"), "- (x) write tests\n");
}

#[test]
fn test_set_normalizes_padding() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "## ( - ) Release\n");

    commands::set(&set_args("done", file, 1)).expect("set should succeed");
    assert_eq!(env.read_file("notes.md"), "## (x) Release\n");
}

#[test]
fn test_set_preserves_missing_trailing_newline() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "- a\n- b");

    commands::set(&set_args("done", file, 2)).expect("set should succeed");
    assert_eq!(env.read_file("notes.md"), "- a\n- (x) b");
}

#[test]
fn test_set_on_plain_line_fails_and_leaves_file() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "write tests\n");

    let err = commands::set(&set_args("done", file, 1)).unwrap_err();
    assert!(err.to_string().contains("not a bullet or heading"));
    assert_eq!(env.read_file("notes.md"), "write tests\n");
}

#[test]
fn test_set_line_out_of_range() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "- one\n");

    let err = commands::set(&set_args("done", file.clone(), 2)).unwrap_err();
    assert!(err.to_string().contains("out of range"));

    let err = commands::set(&set_args("done", file, 0)).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_set_unknown_status() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", "- one\n");

    let err = commands::set(&set_args("finished", file, 1)).unwrap_err();
    assert!(format!("{err:#}").contains("unknown status"));
    assert_eq!(env.read_file("notes.md"), "- one\n");
}

#[test]
fn test_set_uses_project_statuses_and_leads() {
    let env = TestEnv::new();
    env.write_project_config(
        r#"
lead_tokens = ["*"]

[[statuses]]
name = "someday"
literal = "~"
icon = "…"
"#,
    );
    let file = env.write_file("notes.md", "* idea\n- bullet\n");

    commands::set(&set_args("someday", file.clone(), 1)).expect("custom lead and status");
    assert_eq!(env.read_file("notes.md"), "* (~) idea\n- bullet\n");

    // '-' is no longer a lead token
    assert!(commands::set(&set_args("done", file, 2)).is_err());
}

// =============================================================================
// show
// =============================================================================

#[test]
fn test_show_renders_icons_without_color() {
    let _env = TestEnv::new();
    let (registry, classifier) = default_markers();
    let session = Session::new(Document::from_text(CHECKLIST), classifier, registry);

    let lines = show::render(&session, false);
    assert_eq!(lines[0], "# ▶   Release 1.0");
    assert_eq!(lines[2], "Some prose that is not a todo.");
    assert_eq!(lines[4], "- ✔   write parser");
    assert_eq!(lines[5], "- ◐   write tests");
    assert_eq!(lines[7], "- no marker yet");
}

#[test]
fn test_show_uses_configured_icon() {
    let env = TestEnv::new();
    env.write_global_config(
        r#"
[[statuses]]
name = "done"
icon = "*"
"#,
    );

    let (registry, classifier) = Config::load().unwrap().markers().unwrap();
    let session = Session::new(Document::from_text("- (x) shipped\n"), classifier, registry);
    assert_eq!(show::render(&session, false), ["- *   shipped"]);
}

// =============================================================================
// list
// =============================================================================

#[test]
fn test_collect_todos_in_file() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", CHECKLIST);
    let (registry, classifier) = default_markers();

    let entries = collect_todos(&file, &classifier, &registry, None).unwrap();
    let summary: Vec<(usize, &str, &str)> = entries
        .iter()
        .map(|e| (e.line, e.status.name.as_str(), e.text.as_str()))
        .collect();

    assert_eq!(
        summary,
        [
            (1, "ongoing", "Release 1.0"),
            (5, "done", "write parser"),
            (6, "pending", "write tests"),
            (7, "important", "padded marker"),
        ]
    );
}

#[test]
fn test_collect_todos_filters_by_status() {
    let env = TestEnv::new();
    let file = env.write_file("notes.md", CHECKLIST);
    let (registry, classifier) = default_markers();
    let done = registry.resolve("done").unwrap().clone();

    let entries = collect_todos(&file, &classifier, &registry, Some(&done)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line, 5);
}

#[test]
fn test_collect_todos_walks_markdown_files() {
    let env = TestEnv::new();
    env.write_file("a.md", "- (x) a\n");
    env.write_file("docs/b.md", "- (-) b\n");
    env.write_file("docs/c.txt", "- (x) not markdown\n");
    env.write_file(".hidden/d.md", "- (x) hidden\n");
    let (registry, classifier) = default_markers();

    let entries = collect_todos(env.project_path(), &classifier, &registry, None).unwrap();
    let names: Vec<String> = entries
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.md", "b.md"]);
}

#[test]
fn test_list_command_with_unknown_status_fails() {
    let env = TestEnv::new();
    let args = ListArgs {
        path: env.project_path().to_path_buf(),
        status: Some("finished".to_string()),
    };
    assert!(commands::list(&args).is_err());
}

#[test]
fn test_list_command_succeeds_on_empty_project() {
    let env = TestEnv::new();
    let args = ListArgs {
        path: env.project_path().to_path_buf(),
        status: None,
    };
    assert!(commands::list(&args).is_ok());
}
