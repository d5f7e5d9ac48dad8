//! usage-view のコマンド（Command Pattern）

use std::path::PathBuf;

use common::domain::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Help,

    /// 端末に一覧（と任意で集計・日別サマリー）を表示
    Show { scope: Scope, stats: bool, daily: bool },

    /// Markdown へ書き出す（表示はしない）
    Export { scope: Scope, output: PathBuf },
}

impl ViewCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Show { .. } => "show",
            Self::Export { .. } => "export",
        }
    }
}
