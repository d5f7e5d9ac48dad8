//! Outbound ポート: アプリが外界（FS・時刻・環境変数・ログ・記録ストア）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod record_store;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::{tmp_path, FileSystem, TMP_SUFFIX};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use record_store::{AppendOptions, RecordStore};
