//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// Config を受け取り終了コードを返す
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
