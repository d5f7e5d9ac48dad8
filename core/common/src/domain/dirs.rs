//! 実行時ディレクトリ（CLAUDE_ANALYSIS_PATH / XDG 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、記録ファイル・ログのパス計算に使う。

use std::path::PathBuf;

/// ログファイル名
const LOG_FILENAME: &str = "usage-log.jsonl";

/// 解決済みの data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    /// 日別 Markdown の格納先
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// JSONL ログファイル
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let dirs = Dirs {
            data_dir: PathBuf::from("/data"),
            state_dir: PathBuf::from("/state"),
        };
        assert_eq!(dirs.log_file(), PathBuf::from("/state/logs/usage-log.jsonl"));
    }
}
