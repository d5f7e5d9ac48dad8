//! 記録の追記ユースケース

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use common::domain::{aggregate_records, non_blank, Record, RecordDraft, Stats};
use common::error::Error;
use common::ports::outbound::{AppendOptions, Clock, Log, LogLevel, LogRecord, RecordStore};

/// 追記の入力
#[derive(Debug, Clone, Default)]
pub struct RecordRequest {
    /// None なら今日
    pub date: Option<NaiveDate>,
    pub draft: RecordDraft,
    pub auto_triggered: bool,
}

/// 追記の結果（書いた行と、その日の集計）
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub record: Record,
    pub day: Stats,
}

pub struct RecordUseCase {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl RecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self { store, clock, log }
    }

    /// 必須項目を確認して追記する
    ///
    /// 手動記録は stage と problem が必須。自動採取は problem のみ必須（stage は既定値）。
    pub fn record(&self, request: RecordRequest) -> Result<RecordOutcome, Error> {
        if !request.auto_triggered && non_blank(request.draft.stage.clone()).is_none() {
            return Err(Error::validation("stage is required (--stage/-s)"));
        }
        if non_blank(request.draft.problem.clone()).is_none() {
            return Err(Error::validation("problem description is required (--problem/-p)"));
        }

        let date = request.date.unwrap_or_else(|| self.clock.today());
        let record = self.store.append(
            date,
            request.draft,
            AppendOptions {
                auto_triggered: request.auto_triggered,
            },
        )?;
        let day = aggregate_records(&self.store.load(date)?);
        let path = self.store.path_for(date);

        self.log.emit(
            LogRecord::new(LogLevel::Info, "record appended")
                .layer("usecase")
                .kind("store")
                .field("date", date.format("%Y-%m-%d").to_string())
                .field("auto_triggered", request.auto_triggered)
                .field("problem_type", record.problem_type.as_str())
                .field("status", record.status.as_str()),
        );

        Ok(RecordOutcome {
            date,
            path,
            record,
            day,
        })
    }
}
