//! usage-record のコマンド（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

use chrono::NaiveDate;
use common::domain::RecordDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    Help,

    /// 対話モード。CLI で渡された値は各質問の既定値になる
    Interactive {
        date: Option<NaiveDate>,
        prefill: RecordDraft,
    },

    /// フラグ指定での追記
    Append {
        date: Option<NaiveDate>,
        draft: RecordDraft,
        /// フック経由の自動採取（stage 省略可）
        auto_triggered: bool,
    },
}

impl RecordCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Interactive { .. } => "interactive",
            Self::Append {
                auto_triggered: true,
                ..
            } => "auto",
            Self::Append { .. } => "append",
        }
    }
}
