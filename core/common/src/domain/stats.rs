//! 集計（読み取り専用・リクエスト単位）
//!
//! 永続化もキャッシュもしない。必要になるたびに `aggregate` で作り直す。

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::record::{Entry, Priority, ProblemType, Record, Status, DEFAULT_STAGE};

/// 1 日分の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub count: usize,
    pub minutes: u64,
    pub resolved: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub total_minutes: u64,
    pub resolved: usize,
    pub pending: usize,
    pub follow_up: usize,
    pub by_type: BTreeMap<ProblemType, usize>,
    pub by_stage: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_date: BTreeMap<NaiveDate, DailySummary>,
}

impl Stats {
    /// 解決率（%）。記録が無いときは None
    pub fn resolve_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.resolved as f64 / self.total as f64 * 100.0)
        }
    }

    /// ヘッダーの「待解决问题」欄（待解决 + 需跟进）
    pub fn open(&self) -> usize {
        self.pending + self.follow_up
    }

    pub fn type_count(&self, t: ProblemType) -> usize {
        self.by_type.get(&t).copied().unwrap_or(0)
    }

    fn add(&mut self, record: &Record) {
        self.total += 1;
        self.total_minutes += u64::from(record.time_spent_minutes.unwrap_or(0));
        match record.status {
            Status::Resolved => self.resolved += 1,
            Status::Pending => self.pending += 1,
            Status::FollowUp => self.follow_up += 1,
        }
        *self.by_type.entry(record.problem_type).or_insert(0) += 1;
        let stage = record.stage.trim();
        let stage = if stage.is_empty() { DEFAULT_STAGE } else { stage };
        *self.by_stage.entry(stage.to_string()).or_insert(0) += 1;
        *self.by_priority.entry(record.priority).or_insert(0) += 1;
    }
}

/// 日付付き記録の集計
pub fn aggregate(entries: &[Entry]) -> Stats {
    let mut stats = Stats::default();
    for e in entries {
        stats.add(&e.record);
        let day = stats.by_date.entry(e.date).or_default();
        day.count += 1;
        day.minutes += u64::from(e.record.time_spent_minutes.unwrap_or(0));
        if e.record.status == Status::Resolved {
            day.resolved += 1;
        }
    }
    stats
}

/// 1 文書分（日付なし）の集計。ヘッダーの再計算に使う。
pub fn aggregate_records(records: &[Record]) -> Stats {
    let mut stats = Stats::default();
    for r in records {
        stats.add(r);
    }
    stats
}
