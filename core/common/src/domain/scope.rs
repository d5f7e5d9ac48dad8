//! 表示範囲（Scope）
//!
//! 「今日」等の相対指定は呼び出し側が渡す `today` を基準に解決する（時刻は Clock ポート経由）。

use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Today,
    Date(NaiveDate),
    /// ISO 週の月曜日から今日まで
    ThisWeek,
    /// 月初から今日まで
    ThisMonth,
    All,
}

impl Scope {
    /// 包含的な日付範囲。All は None（全ファイル）
    pub fn range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Scope::Today => Some((today, today)),
            Scope::Date(d) => Some((*d, *d)),
            Scope::ThisWeek => {
                let back = u64::from(today.weekday().num_days_from_monday());
                let monday = today.checked_sub_days(Days::new(back)).unwrap_or(today);
                Some((monday, today))
            }
            Scope::ThisMonth => {
                let first = today.with_day(1).unwrap_or(today);
                Some((first, today))
            }
            Scope::All => None,
        }
    }

    /// 単一日付の Scope ならその日付
    pub fn single_day(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Scope::Today => Some(today),
            Scope::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// 表示用タイトル
    pub fn title(&self, today: NaiveDate) -> String {
        match self {
            Scope::Today => format!("Today ({})", today.format("%Y-%m-%d")),
            Scope::Date(d) => format!("Records for {}", d.format("%Y-%m-%d")),
            Scope::ThisWeek => {
                let w = today.iso_week();
                format!("This week ({}-W{:02})", w.year(), w.week())
            }
            Scope::ThisMonth => format!("This month ({})", today.format("%Y-%m")),
            Scope::All => "All records".to_string(),
        }
    }
}
