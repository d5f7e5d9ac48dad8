//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, MarkdownRecordStore, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, RecordStore};

use crate::usecase::{ExportUseCase, ViewUseCase};

pub struct App {
    pub dirs: Dirs,
    pub logger: Arc<dyn Log>,
    pub view_use_case: ViewUseCase,
    pub export_use_case: ExportUseCase,
}

/// ポートを差し替えて組み立てる（テストからも使う）
pub fn wire_with(dirs: Dirs, fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, logger: Arc<dyn Log>) -> App {
    let store: Arc<dyn RecordStore> = Arc::new(MarkdownRecordStore::new(
        Arc::clone(&fs),
        Arc::clone(&clock),
        Arc::clone(&logger),
        dirs.data_dir.clone(),
    ));
    App {
        view_use_case: ViewUseCase::new(
            store,
            Arc::clone(&clock),
            Arc::clone(&logger),
            dirs.data_dir.clone(),
        ),
        export_use_case: ExportUseCase::new(fs, clock, Arc::clone(&logger)),
        dirs,
        logger,
    }
}

pub fn wire_view(dir_override: Option<PathBuf>, verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let dirs = StdEnvResolver.resolve_dirs(dir_override)?;
    let level = if verbose { LogLevel::Debug } else { LogLevel::Info };
    let logger: Arc<dyn Log> = match fs.create_dir_all(&dirs.logs_dir()) {
        Ok(()) => Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()).with_max_level(level)),
        Err(_) => Arc::new(NoopLog),
    };
    Ok(wire_with(dirs, fs, Arc::new(StdClock), logger))
}
