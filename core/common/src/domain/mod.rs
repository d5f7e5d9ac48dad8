//! ドメイン型（記録・範囲・集計・ディレクトリ）
//!
//! I/O を持たない純粋な型と関数だけを置く。

pub mod dirs;
pub mod record;
pub mod scope;
pub mod stats;

pub use dirs::Dirs;
pub use record::{
    non_blank, parse_minutes, Entry, Priority, ProblemType, Record, RecordDraft, Status,
    DEFAULT_STAGE, UNSET,
};
pub use scope::Scope;
pub use stats::{aggregate, aggregate_records, DailySummary, Stats};
