mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::ViewCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_view, App};

/// Command をディスパッチする Runner（表示文字列はここで stdout へ出す）
struct Runner {
    app: App,
}

impl Runner {
    /// 終了コードと stdout に出す本文
    fn dispatch(&self, command: ViewCommand) -> Result<(i32, String), Error> {
        match command {
            ViewCommand::Help => Ok((0, help_text())),
            ViewCommand::Show {
                scope,
                stats,
                daily,
            } => {
                let selection = self.app.view_use_case.select(scope)?;
                let mut blocks = vec![adapter::render_records(&selection.title, &selection.entries)];
                if stats {
                    blocks.push(adapter::render_stats(&selection.stats));
                }
                if daily && !selection.entries.is_empty() {
                    blocks.push(adapter::render_daily(&selection.stats));
                }
                Ok((0, blocks.join("\n")))
            }
            ViewCommand::Export { scope, output } => {
                let selection = self.app.view_use_case.select(scope)?;
                let count = self
                    .app
                    .export_use_case
                    .export(&selection.entries, &output)?;
                Ok((0, format!("Exported {} record(s) to: {}", count, output.display())))
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let command = config_to_command(&config)?;
        let name = command.name();
        self.app.logger.emit(
            LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", name)
                .field("data_dir", self.app.dirs.data_dir.display().to_string()),
        );

        let result = self.dispatch(command).map(|(code, text)| {
            println!("{}", text);
            code
        });

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.app.logger.emit(
            LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.app.logger.emit(
                LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn print_usage() {
    eprintln!("Usage: usage-view [-h] [-t|-d YYYY-MM-DD|-w|-m|-a] [--stats] [--daily] [-o file] [--dir directory]");
}

fn help_text() -> String {
    [
        "Usage: usage-view [-h] [-t|-d YYYY-MM-DD|-w|-m|-a] [--stats] [--daily] [-o file] [--dir directory]",
        "  -h, --help             Display this help message.",
        "  -t, --today            Records of today (default).",
        "  -d, --date <date>      Records of the given date (YYYY-MM-DD).",
        "  -w, --week             Records of this ISO week, Monday to today.",
        "  -m, --month            Records of this month, 1st to today.",
        "  -a, --all              All records.",
        "  --stats                Show counts, time spent, resolve rate and distributions.",
        "  --daily                Show a per-day summary.",
        "  -o, --output <file>    Export the selected records to a Markdown file instead of printing.",
        "  --dir <directory>      Storage directory.",
        "  -v, --verbose          Write debug records to the log file.",
        "  --generate <shell>     Generate shell completion script (bash, zsh, fish).",
        "",
        "Environment:",
        "  CLAUDE_ANALYSIS_PATH   Storage directory. Default: ~/.claude/claude-analysis.",
    ]
    .join("\n")
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_view(config.dir.as_ref().map(PathBuf::from), config.verbose)?;
    Runner { app }.run(config)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("usage-view: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}
