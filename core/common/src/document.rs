//! 日別文書（ヘッダー + 記録表 + フッター）の組み立てと読み取り
//!
//! 記録表が唯一の正本。ヘッダーの件数・分布は書き込みのたびに表から再計算する派生値。

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::codec::{self, HEADER_LABEL, TABLE_HEADER, TABLE_SEPARATOR};
use crate::domain::{ProblemType, Record, Stats};

/// フッターの生成元表記
const GENERATOR_LINE: &str = "*本文件由 usage-log 自动生成*";

/// 文書ファイルの拡張子
pub const DOCUMENT_EXT: &str = "md";

/// 指定日の文書パス（<dir>/YYYY-MM-DD.md）
pub fn document_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.{}", date.format("%Y-%m-%d"), DOCUMENT_EXT))
}

/// ファイル名が `YYYY-MM-DD.md` ならその日付（summary.md 等は None）
pub fn date_from_path(path: &Path) -> Option<NaiveDate> {
    if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXT) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// 書き込み時の付加情報
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// 自動採取（フック経由）の場合はその時刻をフッターに残す
    pub auto_collected_at: Option<NaiveDateTime>,
}

/// タイトル・概要 4 項目・種別分布表（5 行固定、0 件の行も出す）
pub fn render_header(date: NaiveDate, stats: &Stats) -> String {
    let mut lines = vec![
        format!("# 会话记录 - {}", date.format("%Y-%m-%d")),
        String::new(),
        "## 概览".to_string(),
        String::new(),
        format!("- 记录总数: {}", stats.total),
        format!("- 总耗时: {} 分钟", stats.total_minutes),
        format!("- 已解决问题: {}", stats.resolved),
        format!("- 待解决问题: {}", stats.open()),
        String::new(),
        "## 问题分布".to_string(),
        String::new(),
        "| 类型 | 数量 |".to_string(),
        "|------|------|".to_string(),
    ];
    for t in ProblemType::ALL {
        lines.push(format!("| {} | {} |", t.label(), stats.type_count(t)));
    }
    lines.join("\n")
}

/// 文書全体を組み立てる（ファイルへはこの文字列で全体上書きする）
pub fn render_document(
    date: NaiveDate,
    records: &[Record],
    stats: &Stats,
    options: &RenderOptions,
) -> String {
    let mut out = render_header(date, stats);
    out.push_str("\n\n## 详细记录\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_SEPARATOR);
    out.push('\n');
    for r in records {
        out.push_str(&codec::encode(r));
        out.push('\n');
    }
    out.push_str("\n---\n\n");
    out.push_str(GENERATOR_LINE);
    out.push('\n');
    if let Some(at) = options.auto_collected_at {
        out.push_str(&format!("*自动采集时间: {}*\n", at.format("%Y-%m-%d %H:%M:%S")));
    }
    out
}

/// 文書から記録表の行を取り出す
///
/// `| 时间戳` で始まる行を表の開始とみなし、以降の `|` 行を最初の非 `|` 行まで読む。
/// 列幅が合わない行は読み飛ばす。
pub fn parse_records(content: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut in_table = false;
    for line in content.lines() {
        let line = line.trim();
        if !in_table {
            if is_table_header(line) {
                in_table = true;
            }
            continue;
        }
        if !line.starts_with('|') {
            break;
        }
        if let Some(r) = codec::decode(line) {
            records.push(r);
        }
    }
    records
}

fn is_table_header(line: &str) -> bool {
    line.strip_prefix('|')
        .map(|rest| rest.trim_start().starts_with(HEADER_LABEL))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{aggregate_records, RecordDraft, Status};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn rec(problem: &str, minutes: Option<u32>, status: Status, t: ProblemType) -> Record {
        RecordDraft {
            problem: Some(problem.to_string()),
            stage: Some("编码".to_string()),
            time_spent_minutes: minutes,
            status: Some(status),
            problem_type: Some(t),
            ..Default::default()
        }
        .into_record("10:00")
    }

    #[test]
    fn test_document_path_and_date() {
        let p = document_path(Path::new("/data"), date());
        assert_eq!(p, PathBuf::from("/data/2024-01-15.md"));
        assert_eq!(date_from_path(&p), Some(date()));
        assert_eq!(date_from_path(Path::new("/data/summary.md")), None);
        assert_eq!(date_from_path(Path::new("/data/2024-01-15.html")), None);
        assert_eq!(date_from_path(Path::new("/data/2024-13-01.md")), None);
    }

    #[test]
    fn test_header_has_fixed_type_rows() {
        let header = render_header(date(), &Stats::default());
        assert!(header.starts_with("# 会话记录 - 2024-01-15"));
        assert!(header.contains("- 记录总数: 0"));
        assert!(header.contains("- 总耗时: 0 分钟"));
        for t in ProblemType::ALL {
            assert!(header.contains(&format!("| {} | 0 |", t.label())));
        }
    }

    #[test]
    fn test_render_then_parse() {
        let records = vec![
            rec("first", Some(10), Status::Resolved, ProblemType::ToolError),
            rec("second", None, Status::FollowUp, ProblemType::Other),
        ];
        let stats = aggregate_records(&records);
        let doc = render_document(date(), &records, &stats, &RenderOptions::default());
        assert!(doc.contains("- 已解决问题: 1"));
        assert!(doc.contains("- 待解决问题: 1"));
        assert!(doc.contains("| 工具错误 | 1 |"));
        assert!(doc.contains(GENERATOR_LINE));
        assert!(!doc.contains("自动采集时间"));
        assert_eq!(parse_records(&doc), records);
    }

    #[test]
    fn test_auto_collected_footer() {
        let at = date().and_hms_opt(9, 5, 0).unwrap();
        let doc = render_document(
            date(),
            &[],
            &Stats::default(),
            &RenderOptions { auto_collected_at: Some(at) },
        );
        assert!(doc.contains("*自动采集时间: 2024-01-15 09:05:00*"));
    }

    #[test]
    fn test_parse_skips_malformed_and_stops_at_table_end() {
        let content = "\
# title

| 类型 | 数量 |
|------|------|
| 工具错误 | 1 |

| 时间戳 | 阶段 | 步骤 | 问题 | 类型 | 解决方案 | 相关文档 | Session ID | 耗时 | 优先级 | 状态 | 备注 |
|--------|------|------|------|------|----------|----------|------------|------|--------|------|------|
| 08:00 | a | - | kept | 其他 | - | - | - | 5 | 中 | 待解决 | - |
| 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 |
| 09:00 | b | - | legacy | 性能问题 | - | 7 | 低 | 已解决 |

| 10:00 | c | - | after table | 其他 | - | - | - | 5 | 中 | 待解决 | - |
";
        let records = parse_records(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].problem, "kept");
        assert_eq!(records[1].problem, "legacy");
        assert_eq!(records[1].time_spent_minutes, Some(7));
    }
}
