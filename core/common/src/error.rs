//! エラーハンドリング
//!
//! 全バイナリで共有するエラー型。main は `exit_code()` をそのまま終了コードに使う。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を併せて表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 必須項目の欠落など、永続化前の検証エラー
    #[error("{0}")]
    Validation(String),
    /// ストレージディレクトリや入力ファイルが存在しない
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Json(String),
    /// 環境変数から必要なパスを解決できない
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// usage 行を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード（成功 0 / 失敗 1 の二値）
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 1);

        let err = Error::validation("problem is required");
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err, Error::Validation("problem is required".to_string()));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref m) if m.contains("gone")));
    }
}
