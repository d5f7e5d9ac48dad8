//! Scope で記録を選び、集計まで済ませるユースケース

use std::path::PathBuf;
use std::sync::Arc;

use common::domain::{aggregate, Entry, Scope, Stats};
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord, RecordStore};
use common::query;

/// 選択結果（表示・書き出しの共通入力）
#[derive(Debug, Clone)]
pub struct Selection {
    pub title: String,
    pub entries: Vec<Entry>,
    pub stats: Stats,
}

pub struct ViewUseCase {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    data_dir: PathBuf,
}

impl ViewUseCase {
    pub fn new(
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            clock,
            log,
            data_dir,
        }
    }

    /// ストレージディレクトリが無ければ NotFound（記録 0 件は正常）
    pub fn select(&self, scope: Scope) -> Result<Selection, Error> {
        if !self.store.is_initialized() {
            return Err(Error::not_found(format!(
                "storage directory does not exist: {} (create a record with usage-record first)",
                self.data_dir.display()
            )));
        }
        let today = self.clock.today();
        let entries = query::select(self.store.as_ref(), scope, today)?;
        let stats = aggregate(&entries);
        self.log.emit(
            LogRecord::new(LogLevel::Debug, "records selected")
                .layer("usecase")
                .kind("query")
                .field("scope", scope.title(today))
                .field("entries", entries.len()),
        );
        Ok(Selection {
            title: scope.title(today),
            entries,
            stats,
        })
    }
}
