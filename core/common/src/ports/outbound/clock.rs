//! 時刻 Outbound ポート
//!
//! 記録の時刻・「今日」「今週」の基準はこの trait 経由で取得する。

use chrono::{NaiveDate, NaiveDateTime};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock`（ローカル時刻）やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在のローカル日時
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
