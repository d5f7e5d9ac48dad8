//! 表コーデック: Record ⇔ Markdown 表の 1 行
//!
//! 列幅で 2 種類のレイアウトを判別する（9 列の旧形式 / 12 列の拡張形式）。
//! それ以外の幅・ヘッダー行・区切り行は `None`（読み飛ばし）で、エラーにはしない。

use crate::domain::{
    non_blank, parse_minutes, Priority, ProblemType, Record, Status, DEFAULT_STAGE, UNSET,
};

/// 記録表のヘッダー先頭セル
pub const HEADER_LABEL: &str = "时间戳";

/// 記録表のヘッダー行（拡張形式）
pub const TABLE_HEADER: &str =
    "| 时间戳 | 阶段 | 步骤 | 问题 | 类型 | 解决方案 | 相关文档 | Session ID | 耗时 | 优先级 | 状态 | 备注 |";

pub const TABLE_SEPARATOR: &str =
    "|--------|------|------|------|------|----------|----------|------------|------|--------|------|------|";

const LEGACY_WIDTH: usize = 9;
const EXTENDED_WIDTH: usize = 12;

/// 列数で選ばれる行レイアウト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLayout {
    /// 时间戳|阶段|步骤|问题|类型|解决方案|耗时|优先级|状态
    Legacy([String; LEGACY_WIDTH]),
    /// 时间戳|阶段|步骤|问题|类型|解决方案|相关文档|Session ID|耗时|优先级|状态|备注
    Extended([String; EXTENDED_WIDTH]),
}

impl RowLayout {
    /// セル列からレイアウトを選ぶ。9 / 12 列以外は None
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        match cells.len() {
            LEGACY_WIDTH => cells.try_into().ok().map(Self::Legacy),
            EXTENDED_WIDTH => cells.try_into().ok().map(Self::Extended),
            _ => None,
        }
    }

    pub fn into_record(self) -> Record {
        match self {
            Self::Legacy([timestamp, stage, step, problem, kind, solution, time, priority, status]) => {
                build_record(RowFields {
                    timestamp,
                    stage,
                    step,
                    problem,
                    kind,
                    solution,
                    docs: UNSET.to_string(),
                    session: UNSET.to_string(),
                    time,
                    priority,
                    status,
                    note: UNSET.to_string(),
                })
            }
            Self::Extended(
                [timestamp, stage, step, problem, kind, solution, docs, session, time, priority, status, note],
            ) => build_record(RowFields {
                timestamp,
                stage,
                step,
                problem,
                kind,
                solution,
                docs,
                session,
                time,
                priority,
                status,
                note,
            }),
        }
    }
}

struct RowFields {
    timestamp: String,
    stage: String,
    step: String,
    problem: String,
    kind: String,
    solution: String,
    docs: String,
    session: String,
    time: String,
    priority: String,
    status: String,
    note: String,
}

/// 列挙値の解釈と既定値への寄せはここ（コーデック境界）でだけ行う
fn build_record(f: RowFields) -> Record {
    Record {
        timestamp: non_blank(Some(f.timestamp)).unwrap_or_default(),
        stage: non_blank(Some(f.stage)).unwrap_or_else(|| DEFAULT_STAGE.to_string()),
        step: non_blank(Some(f.step)),
        problem: non_blank(Some(f.problem)).unwrap_or_default(),
        problem_type: ProblemType::parse(&f.kind).unwrap_or_default(),
        solution: non_blank(Some(f.solution)),
        docs: non_blank(Some(f.docs)),
        session: non_blank(Some(f.session)),
        time_spent_minutes: parse_minutes(&f.time),
        priority: Priority::parse(&f.priority).unwrap_or_default(),
        status: Status::parse(&f.status).unwrap_or_default(),
        note: non_blank(Some(f.note)),
    }
}

/// セル値のエスケープ（`|` → `\|`、改行 → 空白）。空は `-`
pub fn escape_cell(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        return UNSET.to_string();
    }
    v.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn opt_cell(value: &Option<String>) -> String {
    value.as_deref().map(escape_cell).unwrap_or_else(|| UNSET.to_string())
}

/// Record を拡張形式（12 列）の 1 行にする
pub fn encode(record: &Record) -> String {
    let cells = [
        escape_cell(&record.timestamp),
        escape_cell(&record.stage),
        opt_cell(&record.step),
        escape_cell(&record.problem),
        record.problem_type.label().to_string(),
        opt_cell(&record.solution),
        opt_cell(&record.docs),
        opt_cell(&record.session),
        record
            .time_spent_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| UNSET.to_string()),
        record.priority.label().to_string(),
        record.status.label().to_string(),
        opt_cell(&record.note),
    ];
    format!("| {} |", cells.join(" | "))
}

/// 行をセルに分割する（`\|` はセル内の `|` として扱い、前後の空白を除く）
pub fn split_cells(row: &str) -> Vec<String> {
    let row = row.trim();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = row.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    // 末尾の `|` の後ろに残ったものは行末の閉じ以降なので、空でなければセルとして扱う
    if !current.trim().is_empty() {
        cells.push(current);
    }
    if row.starts_with('|') && !cells.is_empty() {
        cells.remove(0);
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

/// 1 行を Record に戻す。ヘッダー行・区切り行・未知の列幅は None
pub fn decode(row: &str) -> Option<Record> {
    let cells = split_cells(row);
    if cells.first().map(String::as_str) == Some(HEADER_LABEL) || is_separator(&cells) {
        return None;
    }
    RowLayout::from_cells(cells).map(RowLayout::into_record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            timestamp: "14:05".to_string(),
            stage: "调试".to_string(),
            step: Some("run tests".to_string()),
            problem: "test failed".to_string(),
            problem_type: ProblemType::ExecutionFailure,
            solution: Some("fix assertion".to_string()),
            docs: Some("a.md,b.md".to_string()),
            session: Some("abc-123".to_string()),
            time_spent_minutes: Some(20),
            priority: Priority::High,
            status: Status::Resolved,
            note: None,
        }
    }

    #[test]
    fn test_encode_layout() {
        let row = encode(&sample());
        assert_eq!(
            row,
            "| 14:05 | 调试 | run tests | test failed | 执行失败 | fix assertion | a.md,b.md | abc-123 | 20 | 高 | 已解决 | - |"
        );
    }

    #[test]
    fn test_round_trip() {
        let r = sample();
        assert_eq!(decode(&encode(&r)), Some(r));

        let minimal = Record {
            step: None,
            solution: None,
            docs: None,
            session: None,
            time_spent_minutes: None,
            note: Some("later".to_string()),
            problem_type: ProblemType::Other,
            priority: Priority::Low,
            status: Status::FollowUp,
            ..sample()
        };
        assert_eq!(decode(&encode(&minimal)), Some(minimal));
    }

    #[test]
    fn test_pipe_and_newline_escaping() {
        let r = Record {
            problem: "a | b".to_string(),
            solution: Some("line1\nline2".to_string()),
            note: Some("back\\slash | pipe".to_string()),
            ..sample()
        };
        let row = encode(&r);
        assert!(row.contains("a \\| b"));
        assert!(row.contains("line1 line2"));
        assert_eq!(split_cells(&row).len(), 12);

        let back = decode(&row).unwrap();
        assert_eq!(back.problem, "a | b");
        assert_eq!(back.solution.as_deref(), Some("line1 line2"));
        assert_eq!(back.note.as_deref(), Some("back\\slash | pipe"));
    }

    #[test]
    fn test_legacy_row_matches_extended() {
        let legacy = "| 09:10 | 编码 | step | skill not triggered | 工具错误 | retry | 15 | 中 | 待解决 |";
        let extended =
            "| 09:10 | 编码 | step | skill not triggered | 工具错误 | retry | - | - | 15 | 中 | 待解决 | - |";
        let a = decode(legacy).unwrap();
        let b = decode(extended).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.time_spent_minutes, Some(15));
        assert_eq!(a.docs, None);
        assert_eq!(a.session, None);
        assert_eq!(a.status, Status::Pending);
    }

    #[test]
    fn test_header_and_separator_skipped() {
        assert_eq!(decode(TABLE_HEADER), None);
        assert_eq!(decode(TABLE_SEPARATOR), None);
        assert_eq!(decode("|:---|---:|"), None);
    }

    #[test]
    fn test_other_widths_are_malformed() {
        let ten = "| 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 |";
        assert_eq!(split_cells(ten).len(), 10);
        assert_eq!(decode(ten), None);
        assert_eq!(decode("| a | b | c | d | e | f | g | h | i | j | k |"), None);
        assert_eq!(
            decode("| a | b | c | d | e | f | g | h | i | j | k | l | m |"),
            None
        );
        assert_eq!(decode(""), None);
    }

    #[test]
    fn test_unknown_enum_text_falls_back() {
        let row = "| 10:00 | s | - | p | 网络 | - | - | - | abc | 紧急 | 进行中 | - |";
        let r = decode(row).unwrap();
        assert_eq!(r.problem_type, ProblemType::Other);
        assert_eq!(r.priority, Priority::Medium);
        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.time_spent_minutes, None);
        assert_eq!(r.step, None);
    }

    #[test]
    fn test_english_identifiers_accepted() {
        let row = "| 10:00 | s | - | p | performance | - | - | - | 3 | low | resolved | - |";
        let r = decode(row).unwrap();
        assert_eq!(r.problem_type, ProblemType::Performance);
        assert_eq!(r.priority, Priority::Low);
        assert_eq!(r.status, Status::Resolved);
    }
}
