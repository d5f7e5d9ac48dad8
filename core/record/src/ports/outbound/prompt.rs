//! 対話入力 Outbound ポート

use common::error::Error;

/// 1 行表示・1 行入力の対話チャネル
pub trait Prompt: Send + Sync {
    /// 案内を 1 行表示する
    fn say(&self, line: &str);

    /// 質問を表示して 1 行読む（末尾改行なし）。入力終端は空文字
    fn ask(&self, question: &str) -> Result<String, Error>;
}
