//! 時刻実装（ローカル時刻 / 固定時刻）

use crate::ports::outbound::Clock;
use chrono::NaiveDateTime;

/// chrono::Local を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// 常に同じ時刻を返す Clock（テスト・日付指定の再現用）
#[derive(Debug, Clone)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
