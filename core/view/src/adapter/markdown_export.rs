//! Markdown への書き出し（10 列の独立した文書）

use chrono::NaiveDateTime;
use common::codec::escape_cell;
use common::domain::{Entry, UNSET};

const EXPORT_HEADER: &str = "| 日期 | 时间 | 阶段 | 步骤 | 问题 | 类型 | 解决方案 | 耗时 | 优先级 | 状态 |";
const EXPORT_SEPARATOR: &str = "|------|------|------|------|------|------|----------|------|--------|------|";

fn opt(v: &Option<String>) -> String {
    v.as_deref().map(escape_cell).unwrap_or_else(|| UNSET.to_string())
}

pub fn render_export(entries: &[Entry], exported_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str("# 会话记录导出\n\n");
    out.push_str(&format!("导出时间: {}\n", exported_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("记录总数: {}\n\n", entries.len()));
    out.push_str("## 详细记录\n\n");
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    out.push_str(EXPORT_SEPARATOR);
    out.push('\n');
    for e in entries {
        let r = &e.record;
        let cells = [
            e.date.format("%Y-%m-%d").to_string(),
            escape_cell(&r.timestamp),
            escape_cell(&r.stage),
            opt(&r.step),
            escape_cell(&r.problem),
            r.problem_type.label().to_string(),
            opt(&r.solution),
            r.time_spent_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| UNSET.to_string()),
            r.priority.label().to_string(),
            r.status.label().to_string(),
        ];
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::codec::split_cells;
    use common::domain::{ProblemType, RecordDraft};

    #[test]
    fn test_export_document() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let entries = vec![Entry {
            date,
            record: RecordDraft {
                stage: Some("编码".to_string()),
                problem: Some("pipe | inside".to_string()),
                problem_type: Some(ProblemType::ToolError),
                time_spent_minutes: Some(12),
                ..Default::default()
            }
            .into_record("10:30"),
        }];
        let at = date.and_hms_opt(18, 0, 0).unwrap();
        let doc = render_export(&entries, at);
        assert!(doc.contains("导出时间: 2024-01-15 18:00:00"));
        assert!(doc.contains("记录总数: 1"));
        assert!(doc.contains(EXPORT_HEADER));

        let row = doc.lines().last().unwrap();
        let cells = split_cells(row);
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0], "2024-01-15");
        assert_eq!(cells[4], "pipe | inside");
        assert_eq!(cells[5], "工具错误");
        assert_eq!(cells[7], "12");
        assert_eq!(cells[9], "待解决");
    }
}
