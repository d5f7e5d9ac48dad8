//! 表示・書き出しのアダプター（文字列を組み立てるだけで I/O はしない）

pub(crate) mod markdown_export;
pub(crate) mod terminal;

pub(crate) use markdown_export::render_export;
pub(crate) use terminal::{render_daily, render_records, render_stats};
