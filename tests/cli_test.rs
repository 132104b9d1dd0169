use codegen::cli::{get_command, help_text, Args, Command};
use codegen::error::Error;
use codegen::loader::SupportRoot;
use std::fs;
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Args {
    Args::from_arguments(args.iter().copied()).unwrap()
}

#[test]
fn test_no_args() {
    let parsed = make_args(&[]);
    assert!(parsed.arguments.is_empty());
    assert!(matches!(get_command(parsed).unwrap(), Command::Help));
}

#[test]
fn test_flags_and_files_are_captured_verbatim() {
    let parsed = make_args(&["-lang=ruby", "foo", "-name=Jane Doe", "bar"]);
    assert_eq!(parsed.arguments, vec!["-lang=ruby", "foo", "-name=Jane Doe", "bar"]);
}

#[test]
fn test_double_dash_is_kept() {
    let parsed = make_args(&["--", "bar"]);
    assert_eq!(parsed.arguments, vec!["--", "bar"]);
}

#[test]
fn test_lone_double_dash_is_not_help() {
    match get_command(make_args(&["--"])) {
        Err(Error::ArgumentError { argument }) => assert_eq!(argument, "--"),
        other => panic!("Expected ArgumentError, got {other:?}"),
    }
}

#[test]
fn test_double_dash_before_file_is_rejected() {
    match get_command(make_args(&["--", "bar"])) {
        Err(Error::ArgumentError { argument }) => assert_eq!(argument, "--"),
        other => panic!("Expected ArgumentError, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(vec![b'f', 0xff]);
    assert!(matches!(Args::from_arguments([raw]), Err(Error::ArgumentError { .. })));
}

#[test]
fn test_help_from_support_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("HELP"), "usage: codegen\n").unwrap();
    let root = SupportRoot::open(temp_dir.path()).unwrap();

    assert_eq!(help_text(Some(&root)), "usage: codegen\n");
}

#[test]
fn test_help_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let root = SupportRoot::open(temp_dir.path()).unwrap();

    let help = help_text(Some(&root));
    assert!(help.contains("-key=value"));
    assert_eq!(help, help_text(None));
}
