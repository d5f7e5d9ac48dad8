//! md-html: Markdown 文書をスタイル付きの単体 HTML に変換する
//!
//! 記録ストアとは独立。`--batch` のときだけ既定の記録ディレクトリを参照する。

mod convert;
mod inline;
mod render;
mod template;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::builder::ArgAction;
use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use convert::{BatchReport, Converted, Converter};
use inline::InlineFormatter;

#[derive(Debug, Clone, Default, PartialEq)]
struct Config {
    help: bool,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    directory: Option<PathBuf>,
    batch: bool,
}

/// 実行モード（優先順: --batch > -d > -i）
#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Help,
    File { input: PathBuf, output: Option<PathBuf> },
    Directory { dir: PathBuf, out_dir: Option<PathBuf> },
    DefaultDirectory,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("md-html")
        .about("Convert Markdown reports to standalone HTML pages")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .help("Markdown file to convert")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Output file (with -i) or output directory (with -d)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("dir")
                .help("Convert every *.md in a directory")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("batch")
                .long("batch")
                .help("Convert every *.md in the record directory (CLAUDE_ANALYSIS_PATH)")
                .action(ArgAction::SetTrue),
        )
}

fn parse_args_from<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let m = build_clap_command().try_get_matches_from(args)?;
    let path = |id: &str| m.get_one::<String>(id).map(PathBuf::from);
    Ok(Config {
        help: m.get_flag("help"),
        input: path("input"),
        output: path("output"),
        directory: path("directory"),
        batch: m.get_flag("batch"),
    })
}

fn config_to_mode(config: Config) -> Mode {
    if config.help {
        Mode::Help
    } else if config.batch {
        Mode::DefaultDirectory
    } else if let Some(dir) = config.directory {
        Mode::Directory {
            dir,
            out_dir: config.output,
        }
    } else if let Some(input) = config.input {
        Mode::File {
            input,
            output: config.output,
        }
    } else {
        Mode::Help
    }
}

fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Help => "help",
        Mode::File { .. } => "file",
        Mode::Directory { .. } => "directory",
        Mode::DefaultDirectory => "batch",
    }
}

fn print_help() {
    println!("Usage: md-html [-h] (-i file [-o out.html] | -d dir [-o outdir] | --batch)");
    println!("  -h, --help             Display this help message.");
    println!("  -i, --input <file>     Convert one Markdown file (default output: sibling .html).");
    println!("  -d, --directory <dir>  Convert every *.md in a directory.");
    println!("  -o, --output <path>    Output file for -i, output directory for -d.");
    println!("  --batch                Convert the record directory (CLAUDE_ANALYSIS_PATH, default ~/.claude/claude-analysis).");
}

fn print_converted(c: &Converted) {
    println!("[OK] Converted: {}", c.output.display());
    println!("     Source: {}", c.input.display());
    println!("     Size: {} bytes", c.bytes);
}

/// 一括変換の報告。失敗があれば 1
fn print_report(report: &BatchReport, dir: &std::path::Path) -> i32 {
    if report.total() == 0 {
        println!("No Markdown files found in {}", dir.display());
        return 0;
    }
    println!("Found {} Markdown file(s)", report.total());
    for c in &report.converted {
        print_converted(c);
    }
    for (path, e) in &report.failed {
        eprintln!("md-html: {}: {}", path.display(), e);
    }
    println!();
    println!(
        "Batch conversion finished: {}/{} succeeded",
        report.converted.len(),
        report.total()
    );
    if report.failed.is_empty() {
        0
    } else {
        1
    }
}

fn run() -> Result<i32> {
    let config = parse_args_from(std::env::args_os())?;
    let mode = config_to_mode(config);

    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let dirs = StdEnvResolver.resolve_dirs(None)?;
    let logger: Arc<dyn Log> = match fs.create_dir_all(&dirs.logs_dir()) {
        Ok(()) => Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    let converter = Converter::new(
        Arc::clone(&fs),
        Arc::new(StdClock),
        InlineFormatter::new().context("compiling inline patterns")?,
    );

    let name = mode_name(&mode);
    logger.emit(
        LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("command", name),
    );

    let result: Result<i32> = match mode {
        Mode::Help => {
            print_help();
            Ok(0)
        }
        Mode::File { input, output } => converter
            .convert_file(&input, output.as_deref())
            .with_context(|| format!("converting {}", input.display()))
            .map(|c| {
                print_converted(&c);
                0
            }),
        Mode::Directory { dir, out_dir } => converter
            .convert_dir(&dir, out_dir.as_deref())
            .map(|r| print_report(&r, &dir))
            .map_err(Into::into),
        Mode::DefaultDirectory => converter
            .convert_dir(&dirs.data_dir, None)
            .with_context(|| "no records yet: create some with usage-record first".to_string())
            .map(|r| print_report(&r, &dirs.data_dir)),
    };

    let code = result.as_ref().copied().unwrap_or(1);
    logger.emit(
        LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("command", name)
            .field("exit_code", code),
    );
    if let Err(ref e) = result {
        logger.emit(
            LogRecord::new(LogLevel::Error, format!("{:#}", e))
                .layer("cli")
                .kind("error"),
        );
    }
    result
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("md-html: {:#}", e);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(args: &[&str]) -> Mode {
        config_to_mode(parse_args_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn test_modes() {
        assert_eq!(mode(&["md-html"]), Mode::Help);
        assert_eq!(
            mode(&["md-html", "-i", "r.md"]),
            Mode::File {
                input: PathBuf::from("r.md"),
                output: None
            }
        );
        assert_eq!(
            mode(&["md-html", "-d", "reports", "-o", "out"]),
            Mode::Directory {
                dir: PathBuf::from("reports"),
                out_dir: Some(PathBuf::from("out"))
            }
        );
        assert_eq!(mode(&["md-html", "--batch", "-i", "x.md"]), Mode::DefaultDirectory);
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(parse_args_from(["md-html", "--nope"]).is_err());
    }
}
