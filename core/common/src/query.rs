//! Scope による記録の取り出し
//!
//! 単一日付は該当文書だけを読む。範囲指定はストアの日付一覧を範囲で絞ってから読む。

use chrono::NaiveDate;

use crate::domain::{Entry, Scope};
use crate::error::Error;
use crate::ports::outbound::RecordStore;

/// Scope に含まれる記録を日付の昇順（同日内は追記順）で返す
pub fn select(
    store: &dyn RecordStore,
    scope: Scope,
    today: NaiveDate,
) -> Result<Vec<Entry>, Error> {
    let dates = match scope.single_day(today) {
        Some(day) => vec![day],
        None => {
            let mut all = store.dates()?;
            if let Some((start, end)) = scope.range(today) {
                all.retain(|d| *d >= start && *d <= end);
            }
            all
        }
    };

    let mut entries = Vec::new();
    for date in dates {
        for record in store.load(date)? {
            entries.push(Entry { date, record });
        }
    }
    Ok(entries)
}
