mod support;

use photo_timeline::TimelineError;
use photo_timeline::api::{TimeLabelPolicy, load_catalog, parse_args, usage};
use support::{ScratchDir, text_timestamp_source};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn missing_argument_is_a_usage_error() {
    let err = parse_args(argv(&["photo-timeline"])).expect_err("no directory");
    match err {
        TimelineError::Usage(message) => assert_eq!(message, usage("photo-timeline")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let dir = ScratchDir::new("extra-args");
    let path = dir.path().to_string_lossy().into_owned();

    let err = parse_args(argv(&["tl", &path, &path])).expect_err("two directories");
    assert!(matches!(err, TimelineError::Usage(message) if message.contains("usage: tl")));
}

#[test]
fn nonexistent_and_non_directory_paths_are_rejected() {
    let dir = ScratchDir::new("bad-paths");
    let missing = dir.path().join("missing").to_string_lossy().into_owned();
    let file = dir.write("photo.jpg", "1").to_string_lossy().into_owned();

    let err = parse_args(argv(&["tl", &missing])).expect_err("missing path");
    assert!(matches!(&err, TimelineError::Usage(message) if message.contains("does not exist")));
    assert!(err.is_clean_exit());

    let err = parse_args(argv(&["tl", &file])).expect_err("file path");
    assert!(matches!(&err, TimelineError::Usage(message) if message.contains("is not a directory")));
}

#[test]
fn existing_directory_is_accepted() {
    let dir = ScratchDir::new("good-dir");
    let path = dir.path().to_string_lossy().into_owned();

    let parsed = parse_args(argv(&["tl", &path])).expect("valid directory");
    assert_eq!(parsed, dir.path());
}

#[test]
fn empty_directory_ends_the_run_cleanly() {
    let dir = ScratchDir::new("no-files");
    dir.mkdir("only-a-subdir");

    let err = load_catalog(dir.path(), &text_timestamp_source, TimeLabelPolicy::UtcDateTime)
        .expect_err("nothing to show");
    assert!(matches!(&err, TimelineError::EmptyCatalog { directory } if directory == dir.path()));
    assert!(err.is_clean_exit());
}

#[test]
fn directory_without_timestamps_is_also_empty() {
    let dir = ScratchDir::new("no-timestamps");
    dir.write("a.jpg", "");
    dir.write("b.jpg", "garbage");

    let err = load_catalog(dir.path(), &text_timestamp_source, TimeLabelPolicy::UtcDateTime)
        .expect_err("nothing to show");
    assert!(matches!(err, TimelineError::EmptyCatalog { .. }));
}

#[test]
fn load_catalog_returns_sorted_entries() {
    let dir = ScratchDir::new("loaded");
    dir.write("late.jpg", "900");
    dir.write("early.jpg", "100");
    dir.write("broken.jpg", "??");

    let catalog = load_catalog(dir.path(), &text_timestamp_source, TimeLabelPolicy::UnixSeconds)
        .expect("catalog");
    let names: Vec<&str> = catalog.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["early.jpg", "late.jpg"]);
}

#[test]
fn only_platform_errors_exit_with_failure() {
    assert!(!TimelineError::Platform("no display".to_owned()).is_clean_exit());
    assert!(TimelineError::InvalidData("bad config".to_owned()).is_clean_exit());
}
