//! 日別 Markdown 文書による RecordStore 実装
//!
//! append は常に「全件読み込み → 集計し直し → 文書全体を上書き」。
//! 上書きは一時ファイル + rename で行うが、プロセス間のロックは持たない
//! （同時に 2 プロセスが書くと後勝ちで片方の追記が失われる）。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::document::{self, RenderOptions};
use crate::domain::{aggregate_records, Record, RecordDraft};
use crate::error::Error;
use crate::ports::outbound::{
    AppendOptions, Clock, FileSystem, Log, LogLevel, LogRecord, RecordStore,
};

pub struct MarkdownRecordStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    dir: PathBuf,
}

impl MarkdownRecordStore {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            clock,
            log,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RecordStore for MarkdownRecordStore {
    fn load(&self, date: NaiveDate) -> Result<Vec<Record>, Error> {
        let path = self.path_for(date);
        if !self.fs.exists(&path) {
            return Ok(Vec::new());
        }
        let content = self.fs.read_to_string(&path)?;
        Ok(document::parse_records(&content))
    }

    fn append(
        &self,
        date: NaiveDate,
        draft: RecordDraft,
        options: AppendOptions,
    ) -> Result<Record, Error> {
        let now = self.clock.now();
        let record = draft.into_record(now.format("%H:%M").to_string());
        if record.problem.is_empty() {
            return Err(Error::validation("problem description is required (--problem)"));
        }

        self.fs.create_dir_all(&self.dir)?;
        let path = self.path_for(date);
        let mut records = self.load(date)?;
        let is_new = records.is_empty() && !self.fs.exists(&path);
        records.push(record.clone());

        let stats = aggregate_records(&records);
        let render = RenderOptions {
            auto_collected_at: options.auto_triggered.then_some(now),
        };
        let content = document::render_document(date, &records, &stats, &render);
        self.fs.write_atomic(&path, &content)?;

        self.log.emit(
            LogRecord::new(LogLevel::Debug, "record appended")
                .layer("store")
                .kind("store")
                .field("path", path.display().to_string())
                .field("new_document", is_new)
                .field("rows", records.len()),
        );
        Ok(record)
    }

    fn dates(&self) -> Result<Vec<NaiveDate>, Error> {
        if !self.fs.exists(&self.dir) {
            return Ok(Vec::new());
        }
        let mut dates: Vec<NaiveDate> = self
            .fs
            .read_dir(&self.dir)?
            .iter()
            .filter_map(|p| document::date_from_path(p))
            .collect();
        dates.sort();
        dates.dedup();
        Ok(dates)
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        document::document_path(&self.dir, date)
    }

    fn is_initialized(&self) -> bool {
        self.fs.is_dir(&self.dir)
    }
}
