//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 記録ディレクトリを上書きする環境変数
pub const DATA_DIR_ENV: &str = "CLAUDE_ANALYSIS_PATH";
/// 状態（ログ）ディレクトリを上書きする環境変数
pub const STATE_DIR_ENV: &str = "USAGE_LOG_STATE_DIR";

const APP_DIR: &str = "usage-log";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(key: &str) -> Option<PathBuf> {
    env::var(key).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self, data_override: Option<PathBuf>) -> Result<Dirs, Error> {
        let home = non_empty_var("HOME");

        let data_dir = match data_override.or_else(|| non_empty_var(DATA_DIR_ENV)) {
            Some(p) => p,
            None => home
                .as_ref()
                .map(|h| h.join(".claude").join("claude-analysis"))
                .ok_or_else(|| Error::env(format!("HOME is not set (or set {})", DATA_DIR_ENV)))?,
        };

        let state_dir = match non_empty_var(STATE_DIR_ENV) {
            Some(p) => p,
            None => non_empty_var("XDG_STATE_HOME")
                .or_else(|| home.as_ref().map(|h| h.join(".local").join("state")))
                .map(|base| base.join(APP_DIR))
                .ok_or_else(|| Error::env(format!("HOME is not set (or set {})", STATE_DIR_ENV)))?,
        };

        Ok(Dirs { data_dir, state_dir })
    }
}
