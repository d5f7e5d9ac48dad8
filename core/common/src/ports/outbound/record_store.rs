//! 記録ストア Outbound ポート
//!
//! 1 日 1 文書の Markdown 表ストア。クエリ層は読み取り（load / dates）のみ使う。

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{Record, RecordDraft};
use crate::error::Error;

/// append の付加オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOptions {
    /// フック等からの自動採取（フッターに採取時刻を残す）
    pub auto_triggered: bool,
}

pub trait RecordStore: Send + Sync {
    /// 指定日の記録（ファイル順）。ファイルが無ければ空
    fn load(&self, date: NaiveDate) -> Result<Vec<Record>, Error>;

    /// 既定値を補い problem を検証した上で追記し、文書全体を書き直す
    fn append(
        &self,
        date: NaiveDate,
        draft: RecordDraft,
        options: AppendOptions,
    ) -> Result<Record, Error>;

    /// 文書が存在する日付の一覧（昇順）
    fn dates(&self) -> Result<Vec<NaiveDate>, Error>;

    /// 指定日の文書の格納先
    fn path_for(&self, date: NaiveDate) -> PathBuf;

    /// ストレージディレクトリが存在するか
    fn is_initialized(&self) -> bool;
}
