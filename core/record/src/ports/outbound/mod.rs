//! Outbound ポート（usage-record 固有）

pub mod prompt;

pub use prompt::Prompt;
