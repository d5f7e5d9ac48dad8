//! usage-record のドメイン（コマンド enum と対話入力の解釈）

pub mod command;
pub mod menu;

pub use command::RecordCommand;
pub use menu::{choose, confirmed};
