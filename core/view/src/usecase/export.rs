//! Markdown 書き出しユースケース

use std::path::Path;
use std::sync::Arc;

use common::domain::Entry;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::render_export;

pub struct ExportUseCase {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl ExportUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self { fs, clock, log }
    }

    /// 書き出した件数を返す。出力先の親ディレクトリは作成する
    pub fn export(&self, entries: &[Entry], output: &Path) -> Result<usize, Error> {
        let content = render_export(entries, self.clock.now());
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_atomic(output, &content)?;
        self.log.emit(
            LogRecord::new(LogLevel::Info, "records exported")
                .layer("usecase")
                .kind("export")
                .field("path", output.display().to_string())
                .field("entries", entries.len()),
        );
        Ok(entries.len())
    }
}
