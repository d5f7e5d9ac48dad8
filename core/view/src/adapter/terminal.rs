//! 端末表示: 固定幅の一覧・集計・日別サマリー

use common::domain::{Entry, Priority, ProblemType, Stats, UNSET};

const RULE_WIDTH: usize = 80;

/// 文字数で切り詰める（超えたら末尾 `...`）。マルチバイト文字の途中では切らない
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

fn banner(title: &str) -> Vec<String> {
    vec![
        String::new(),
        "=".repeat(RULE_WIDTH),
        format!("  {}", title),
        "=".repeat(RULE_WIDTH),
    ]
}

/// 記録一覧。0 件なら案内 1 行
pub fn render_records(title: &str, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No records found".to_string();
    }
    let mut lines = banner(title);
    lines.push(String::new());
    lines.push(format!(
        "{:<16} {:<10} {:<30} {:<8} {:>5}  {:<6}",
        "TIME", "STAGE", "PROBLEM", "TYPE", "MIN", "STATUS"
    ));
    lines.push("-".repeat(RULE_WIDTH));
    for e in entries {
        let r = &e.record;
        let time = format!("{} {}", e.date.format("%Y-%m-%d"), r.timestamp);
        let minutes = r
            .time_spent_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| UNSET.to_string());
        lines.push(format!(
            "{:<16} {:<10} {:<30} {:<8} {:>5}  {:<6}",
            truncate(&time, 16),
            truncate(&r.stage, 10),
            truncate(&r.problem, 30),
            r.problem_type.label(),
            minutes,
            r.status.label()
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total: {} record(s)", entries.len()));
    lines.join("\n")
}

/// 集計ブロック
pub fn render_stats(stats: &Stats) -> String {
    let mut lines = banner("Statistics");
    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(format!("  Records:    {}", stats.total));
    lines.push(format!(
        "  Time spent: {} min ({} h {} min)",
        stats.total_minutes,
        stats.total_minutes / 60,
        stats.total_minutes % 60
    ));
    lines.push(format!("  Resolved:   {}", stats.resolved));
    lines.push(format!("  Pending:    {}", stats.pending));
    lines.push(format!("  Follow-up:  {}", stats.follow_up));
    if let Some(rate) = stats.resolve_rate() {
        lines.push(format!("  Resolve rate: {:.1}%", rate));
    }

    lines.push(String::new());
    lines.push("By type:".to_string());
    let mut types: Vec<(ProblemType, usize)> =
        stats.by_type.iter().map(|(t, c)| (*t, *c)).collect();
    types.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (t, count) in types {
        lines.push(format!("  {:<8} {:>3} {}", t.label(), count, "█".repeat(count)));
    }

    lines.push(String::new());
    lines.push("By stage:".to_string());
    let mut stages: Vec<(&String, &usize)> = stats.by_stage.iter().collect();
    stages.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (stage, count) in stages {
        lines.push(format!("  {}: {}", stage, count));
    }

    lines.push(String::new());
    lines.push("By priority:".to_string());
    for p in Priority::ALL {
        if let Some(count) = stats.by_priority.get(&p) {
            lines.push(format!("  {}: {}", p.label(), count));
        }
    }
    lines.join("\n")
}

/// 日別サマリー。記録が無ければ空文字
pub fn render_daily(stats: &Stats) -> String {
    if stats.by_date.is_empty() {
        return String::new();
    }
    let mut lines = banner("Daily summary");
    lines.push(String::new());
    for (date, day) in &stats.by_date {
        lines.push(format!(
            "  {}: {} record(s), {} min, {} resolved",
            date.format("%Y-%m-%d"),
            day.count,
            day.minutes,
            day.resolved
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::domain::{aggregate, RecordDraft, Status};

    fn entry(day: u32, problem: &str, minutes: Option<u32>, status: Status) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            record: RecordDraft {
                stage: Some("调试".to_string()),
                problem: Some(problem.to_string()),
                time_spent_minutes: minutes,
                status: Some(status),
                ..Default::default()
            }
            .into_record("09:00"),
        }
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 10), "abcdefg...");
        assert_eq!(truncate("问题描述非常非常长的一段文字", 8), "问题描述非...");
    }

    #[test]
    fn test_render_records() {
        assert_eq!(render_records("t", &[]), "No records found");
        let out = render_records(
            "Today (2024-01-15)",
            &[entry(15, "a very long problem description that overflows", Some(5), Status::Resolved)],
        );
        assert!(out.contains("Today (2024-01-15)"));
        assert!(out.contains("2024-01-15 09:00"));
        assert!(out.contains("a very long problem descrip..."));
        assert!(out.contains("已解决"));
        assert!(out.contains("Total: 1 record(s)"));
    }

    #[test]
    fn test_render_stats() {
        let entries = vec![
            entry(1, "a", Some(50), Status::Resolved),
            entry(1, "b", Some(25), Status::Pending),
            entry(2, "c", None, Status::Pending),
        ];
        let out = render_stats(&aggregate(&entries));
        assert!(out.contains("Records:    3"));
        assert!(out.contains("75 min (1 h 15 min)"));
        assert!(out.contains("Resolve rate: 33.3%"));
        assert!(out.lines().any(|l| l.trim_start().starts_with("其他") && l.ends_with(" 3 ███")));
        assert!(out.contains("调试: 3"));
        assert!(out.contains("中: 3"));
        assert!(!out.contains("高:"));
    }

    #[test]
    fn test_render_stats_without_records_has_no_rate() {
        let out = render_stats(&Stats::default());
        assert!(!out.contains("Resolve rate"));
    }

    #[test]
    fn test_render_daily() {
        let entries = vec![
            entry(2, "b", Some(5), Status::Pending),
            entry(1, "a", Some(10), Status::Resolved),
        ];
        let out = render_daily(&aggregate(&entries));
        let first = out.find("2024-01-01").unwrap();
        let second = out.find("2024-01-02").unwrap();
        assert!(first < second);
        assert!(out.contains("2024-01-01: 1 record(s), 10 min, 1 resolved"));
        assert_eq!(render_daily(&Stats::default()), "");
    }
}
