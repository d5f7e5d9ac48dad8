//! Ports & Adapters のポート定義
//!
//! - inbound: CLI からユースケースを呼ぶ入口
//! - outbound: 対話入力（共通のポートは common::ports::outbound）

pub mod inbound;
pub mod outbound;
