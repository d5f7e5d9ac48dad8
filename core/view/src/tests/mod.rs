//! ユースケース単位のテスト（tempdir + 固定時刻）

mod run_app_tests;

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use common::adapter::{FixedClock, NoopLog, StdFileSystem};
use common::codec::{TABLE_HEADER, TABLE_SEPARATOR};
use common::domain::Dirs;

use crate::wiring::{wire_with, App};

pub(crate) fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 「今日」は 2024-01-17（水）
pub(crate) fn app(data_dir: &Path) -> App {
    wire_with(
        Dirs {
            data_dir: data_dir.to_path_buf(),
            state_dir: data_dir.join("state"),
        },
        Arc::new(StdFileSystem),
        Arc::new(FixedClock(d(2024, 1, 17).and_hms_opt(18, 0, 0).unwrap())),
        Arc::new(NoopLog),
    )
}

/// 1 文書を書く。rows は (problem, minutes, status)
pub(crate) fn write_doc(dir: &Path, date: NaiveDate, rows: &[(&str, &str, &str)]) {
    let mut content = format!("# 会话记录 - {}\n\n## 详细记录\n\n{}\n{}\n", date, TABLE_HEADER, TABLE_SEPARATOR);
    for (problem, minutes, status) in rows {
        content.push_str(&format!(
            "| 10:00 | 调试 | - | {} | 工具错误 | - | - | - | {} | 中 | {} | - |\n",
            problem, minutes, status
        ));
    }
    std::fs::write(dir.join(format!("{}.md", date)), content).unwrap();
}
