//! usage-log 共通ライブラリ
//!
//! `usage-record` / `usage-view` と補助ツールで共有するドメイン型・表コーデック・
//! 日別文書・ストア・ポートを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（記録・集計・表示範囲・ディレクトリ）
pub mod domain;

/// 表の 1 行 ⇔ Record
pub mod codec;

/// 日別文書の組み立てと読み取り
pub mod document;

/// Scope による記録の取り出し
pub mod query;

/// Ports & Adapters: Outbound ポート（trait）
pub mod ports;

/// アダプター（ポートの実装）
pub mod adapter;
