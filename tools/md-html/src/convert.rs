//! ファイル単位・ディレクトリ単位の変換

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Clock, FileSystem};

use crate::inline::InlineFormatter;
use crate::render::{extract_title, render_body};
use crate::template::render_page;

/// 1 ファイル分の変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// ディレクトリ一括変換の結果（失敗しても残りは続ける）
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

pub struct Converter {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    inline: InlineFormatter,
}

/// 既定の出力先: 入力と同じ場所の `.html`
pub fn sibling_html(input: &Path) -> PathBuf {
    input.with_extension("html")
}

fn html_file_name(input: &Path) -> Option<std::ffi::OsString> {
    let mut name = input.file_stem()?.to_os_string();
    name.push(".html");
    Some(name)
}

impl Converter {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, inline: InlineFormatter) -> Self {
        Self { fs, clock, inline }
    }

    pub fn convert_str(&self, markdown: &str) -> String {
        let body = render_body(markdown, &self.inline);
        render_page(&extract_title(markdown), &body, self.clock.now())
    }

    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<Converted, Error> {
        if !self.fs.exists(input) {
            return Err(Error::not_found(format!("file not found: {}", input.display())));
        }
        let markdown = self.fs.read_to_string(input)?;
        let html = self.convert_str(&markdown);
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| sibling_html(input));
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_atomic(&output, &html)?;
        Ok(Converted {
            input: input.to_path_buf(),
            output,
            bytes: html.len(),
        })
    }

    /// 直下の `*.md` を変換する。out_dir 未指定なら各ファイルの隣に書く
    pub fn convert_dir(&self, dir: &Path, out_dir: Option<&Path>) -> Result<BatchReport, Error> {
        if !self.fs.is_dir(dir) {
            return Err(Error::not_found(format!("directory not found: {}", dir.display())));
        }
        let inputs: Vec<PathBuf> = self
            .fs
            .read_dir(dir)?
            .into_iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
            .collect();

        let mut report = BatchReport::default();
        for input in inputs {
            let output = out_dir.and_then(|d| html_file_name(&input).map(|name| d.join(name)));
            match self.convert_file(&input, output.as_deref()) {
                Ok(c) => report.converted.push(c),
                Err(e) => report.failed.push((input, e)),
            }
        }
        Ok(report)
    }
}
