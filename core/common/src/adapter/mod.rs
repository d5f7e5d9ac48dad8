//! アダプター（Outbound ポートの標準実装とテスト用実装）
//!
//! usecase はポートの trait 経由でのみファイル・時刻・環境変数に触れる。
//! 組み立ては各バイナリの wiring で行う。

pub mod file_json_log;
pub mod markdown_store;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use markdown_store::MarkdownRecordStore;
pub use std_clock::{FixedClock, StdClock};
pub use std_env_resolver::{StdEnvResolver, DATA_DIR_ENV, STATE_DIR_ENV};
pub use std_fs::StdFileSystem;
