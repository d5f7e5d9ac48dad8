//! セッション記録のドメイン型
//!
//! 列挙型はファイルに書き出すラベル（既存ファイルと同じ中国語表記）と、
//! CLI・統計表示で使う識別子（snake_case）の両方を持つ。

use chrono::NaiveDate;
use serde::Serialize;

/// 未設定セルの表記
pub const UNSET: &str = "-";

/// stage 未指定時の既定値
pub const DEFAULT_STAGE: &str = "未分类";

/// 問題種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    ToolError,
    Misunderstanding,
    ExecutionFailure,
    Performance,
    #[default]
    Other,
}

impl ProblemType {
    /// ヘッダーの分布表に並べる順序
    pub const ALL: [ProblemType; 5] = [
        ProblemType::ToolError,
        ProblemType::Misunderstanding,
        ProblemType::ExecutionFailure,
        ProblemType::Performance,
        ProblemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolError => "tool_error",
            Self::Misunderstanding => "misunderstanding",
            Self::ExecutionFailure => "execution_failure",
            Self::Performance => "performance",
            Self::Other => "other",
        }
    }

    /// ファイル上のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToolError => "工具错误",
            Self::Misunderstanding => "理解偏差",
            Self::ExecutionFailure => "执行失败",
            Self::Performance => "性能问题",
            Self::Other => "其他",
        }
    }

    /// ラベル・識別子のどちらでも受け付ける
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s || t.as_str().eq_ignore_ascii_case(s))
    }
}

/// 優先度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "高",
            Self::Medium => "中",
            Self::Low => "低",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s || p.as_str().eq_ignore_ascii_case(s))
    }
}

/// 対応状況
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Resolved,
    #[default]
    Pending,
    FollowUp,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Resolved, Status::Pending, Status::FollowUp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Pending => "pending",
            Self::FollowUp => "follow_up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Resolved => "已解决",
            Self::Pending => "待解决",
            Self::FollowUp => "需跟进",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.label() == s || st.as_str().eq_ignore_ascii_case(s))
    }
}

/// 1 件の記録（表の 1 行）
///
/// date は行に含まれず、文書（ファイル名）から決まるため [`Entry`] が持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 作成時刻（HH:MM）
    pub timestamp: String,
    pub stage: String,
    pub step: Option<String>,
    pub problem: String,
    pub problem_type: ProblemType,
    pub solution: Option<String>,
    /// カンマ区切りの参照ドキュメント
    pub docs: Option<String>,
    pub session: Option<String>,
    pub time_spent_minutes: Option<u32>,
    pub priority: Priority,
    pub status: Status,
    pub note: Option<String>,
}

/// append に渡す部分的な記録（未指定は既定値で埋める）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub stage: Option<String>,
    pub step: Option<String>,
    pub problem: Option<String>,
    pub problem_type: Option<ProblemType>,
    pub solution: Option<String>,
    pub docs: Option<String>,
    pub session: Option<String>,
    pub time_spent_minutes: Option<u32>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub note: Option<String>,
}

impl RecordDraft {
    /// 既定値を補って Record にする。problem の検証は呼び出し側（ストア）で行う。
    pub fn into_record(self, timestamp: impl Into<String>) -> Record {
        Record {
            timestamp: timestamp.into(),
            stage: non_blank(self.stage).unwrap_or_else(|| DEFAULT_STAGE.to_string()),
            step: non_blank(self.step),
            problem: non_blank(self.problem).unwrap_or_default(),
            problem_type: self.problem_type.unwrap_or_default(),
            solution: non_blank(self.solution),
            docs: non_blank(self.docs),
            session: non_blank(self.session),
            time_spent_minutes: self.time_spent_minutes,
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            note: non_blank(self.note),
        }
    }
}

/// 空文字・空白のみ・"-" は未設定として扱う
pub fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != UNSET)
}

/// 耗时セルの寛容なパース（数値以外は未設定）
pub fn parse_minutes(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

/// 日付付きの記録（クエリ結果の単位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub record: Record,
}
