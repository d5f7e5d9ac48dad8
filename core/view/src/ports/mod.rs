//! Ports & Adapters のポート定義
//!
//! - inbound: CLI からユースケースを呼ぶ入口
//! - outbound: common::ports::outbound をそのまま使う

pub mod inbound;
