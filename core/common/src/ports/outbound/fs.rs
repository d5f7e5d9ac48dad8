//! ファイルシステム Outbound ポート
//!
//! 記録ストア・書き出し・HTML 変換はこの trait 経由でのみファイルに触れる。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// 一時ファイルの接尾辞
pub const TMP_SUFFIX: &str = ".tmp";

/// write_atomic の一時ファイル（`2024-01-15.md` → `2024-01-15.md.<pid>.tmp`）
///
/// プロセスごとに別名にし、他プロセスの書きかけを rename しないようにする。
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(format!(".{}{}", std::process::id(), TMP_SUFFIX));
    PathBuf::from(tmp)
}

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 直下のエントリ（フルパス、名前順）
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error>;
    /// JSONL ログ用。無ければ作成する
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// 一時ファイルに全体を書いて rename で差し替える
    ///
    /// 失敗時に元の文書は残る。ロックはしないので同時書き込みでは後勝ちになる。
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), Error> {
        let tmp = tmp_path(path);
        self.write(&tmp, contents)?;
        self.rename(&tmp, path).inspect_err(|_| {
            let _ = self.remove_file(&tmp);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_is_per_process() {
        let tmp = tmp_path(Path::new("/data/2024-01-15.md"));
        assert_eq!(
            tmp,
            PathBuf::from(format!("/data/2024-01-15.md.{}.tmp", std::process::id()))
        );
        assert_eq!(tmp.parent(), Some(Path::new("/data")));
    }
}
