use tempfile::tempdir;

use super::{app, d, write_doc};
use crate::cli::args::parse_args_from;
use crate::ports::inbound::UseCaseRunner;
use crate::Runner;

fn run(dir: &std::path::Path, args: &[&str]) -> Result<i32, common::error::Error> {
    let config = parse_args_from(args).unwrap();
    Runner { app: app(dir) }.run(config)
}

#[test]
fn test_run_default_scope_with_no_records() {
    let dir = tempdir().unwrap();
    assert_eq!(run(dir.path(), &["usage-view", "--stats", "--daily"]).unwrap(), 0);
}

#[test]
fn test_run_missing_dir_exits_1() {
    let dir = tempdir().unwrap();
    let err = run(&dir.path().join("absent"), &["usage-view", "-a"]).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_run_export() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), d(2024, 1, 2), &[("jan", "3", "已解决")]);
    write_doc(dir.path(), d(2023, 12, 30), &[("dec", "3", "已解决")]);
    let out = dir.path().join("month.md");
    let out_str = out.to_string_lossy().to_string();
    assert_eq!(run(dir.path(), &["usage-view", "-m", "-o", &out_str]).unwrap(), 0);
    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("| jan |"));
    assert!(!content.contains("| dec |"));
}
