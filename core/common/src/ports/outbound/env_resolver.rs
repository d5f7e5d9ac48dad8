//! 環境変数解決 Outbound ポート
//!
//! 記録ディレクトリ・状態ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
pub trait EnvResolver: Send + Sync {
    /// data / state ディレクトリを解決する
    ///
    /// data の優先順位:
    /// 1. `data_override`（CLI の --dir）
    /// 2. CLAUDE_ANALYSIS_PATH
    /// 3. $HOME/.claude/claude-analysis
    ///
    /// state の優先順位:
    /// 1. USAGE_LOG_STATE_DIR
    /// 2. $XDG_STATE_HOME/usage-log
    /// 3. $HOME/.local/state/usage-log
    fn resolve_dirs(&self, data_override: Option<PathBuf>) -> Result<Dirs, Error>;
}
