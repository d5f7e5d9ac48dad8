use std::sync::Arc;

use common::domain::{ProblemType, RecordDraft, Status, DEFAULT_STAGE};
use common::error::Error;
use tempfile::tempdir;

use super::{app, today, ScriptedPrompt};
use crate::usecase::RecordRequest;

fn draft(stage: Option<&str>, problem: Option<&str>) -> RecordDraft {
    RecordDraft {
        stage: stage.map(String::from),
        problem: problem.map(String::from),
        ..Default::default()
    }
}

#[test]
fn test_manual_record_requires_stage_and_problem() {
    let dir = tempdir().unwrap();
    let app = app(dir.path(), Arc::new(ScriptedPrompt::default()));

    let err = app
        .record_use_case
        .record(RecordRequest {
            draft: draft(None, Some("p")),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = app
        .record_use_case
        .record(RecordRequest {
            draft: draft(Some("调试"), Some("  ")),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(!dir.path().join("2024-01-15.md").exists());
}

#[test]
fn test_auto_triggered_defaults_stage() {
    let dir = tempdir().unwrap();
    let app = app(dir.path(), Arc::new(ScriptedPrompt::default()));
    let outcome = app
        .record_use_case
        .record(RecordRequest {
            date: None,
            draft: draft(None, Some("hook: command failed")),
            auto_triggered: true,
        })
        .unwrap();
    assert_eq!(outcome.date, today());
    assert_eq!(outcome.record.stage, DEFAULT_STAGE);
    assert_eq!(outcome.record.timestamp, "14:30");
    assert_eq!(outcome.path, dir.path().join("2024-01-15.md"));

    let content = std::fs::read_to_string(&outcome.path).unwrap();
    assert!(content.contains("*自动采集时间: 2024-01-15 14:30:00*"));
}

#[test]
fn test_outcome_carries_day_totals() {
    let dir = tempdir().unwrap();
    let app = app(dir.path(), Arc::new(ScriptedPrompt::default()));
    for (minutes, status) in [(Some(10), Status::Resolved), (None, Status::Pending), (Some(5), Status::Resolved)] {
        let mut d = draft(Some("编码"), Some("p"));
        d.time_spent_minutes = minutes;
        d.status = Some(status);
        d.problem_type = Some(ProblemType::ToolError);
        app.record_use_case
            .record(RecordRequest {
                draft: d,
                ..Default::default()
            })
            .unwrap();
    }
    let mut d = draft(Some("编码"), Some("last"));
    d.time_spent_minutes = Some(20);
    let outcome = app
        .record_use_case
        .record(RecordRequest {
            draft: d,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(outcome.day.total, 4);
    assert_eq!(outcome.day.total_minutes, 35);
    assert_eq!(outcome.day.resolved, 2);
    assert_eq!(outcome.day.type_count(ProblemType::ToolError), 3);
}

#[test]
fn test_explicit_date() {
    let dir = tempdir().unwrap();
    let app = app(dir.path(), Arc::new(ScriptedPrompt::default()));
    let date = chrono::NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let outcome = app
        .record_use_case
        .record(RecordRequest {
            date: Some(date),
            draft: draft(Some("测试"), Some("p")),
            auto_triggered: false,
        })
        .unwrap();
    assert_eq!(outcome.path, dir.path().join("2023-12-31.md"));
    let content = std::fs::read_to_string(&outcome.path).unwrap();
    assert!(content.starts_with("# 会话记录 - 2023-12-31"));
}
