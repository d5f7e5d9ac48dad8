//! std::fs による FileSystem 実装

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

/// 操作名とパスをエラーメッセージに含める
fn io_err(action: &str, path: &Path) -> impl FnOnce(std::io::Error) -> Error {
    let target = path.display().to_string();
    let action = action.to_string();
    move |e| Error::io_msg(format!("Failed to {} '{}': {}", action, target, e))
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(io_err("read", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(io_err("write", path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(io_err("replace", to))
    }

    fn remove_file(&self, path: &Path) -> Result<(), Error> {
        std::fs::remove_file(path).map_err(io_err("remove", path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(io_err("create directory", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut paths = std::fs::read_dir(path)
            .map_err(io_err("list", path))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err("list", path))?;
        paths.sort();
        Ok(paths)
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err("open for append", path))?;
        Ok(Box::new(file))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
