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
use domain::RecordCommand;
use ports::inbound::UseCaseRunner;
use usecase::{RecordOutcome, RecordRequest};
use wiring::{wire_record, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn dispatch(&self, command: RecordCommand) -> Result<i32, Error> {
        match command {
            RecordCommand::Help => {
                print_help();
                Ok(0)
            }
            RecordCommand::Interactive { date, prefill } => {
                match self.app.interactive_use_case.collect(prefill)? {
                    Some(draft) => {
                        let outcome = self.app.record_use_case.record(RecordRequest {
                            date,
                            draft,
                            auto_triggered: false,
                        })?;
                        print_outcome(&outcome);
                        Ok(0)
                    }
                    None => {
                        println!("Cancelled");
                        Ok(1)
                    }
                }
            }
            RecordCommand::Append {
                date,
                draft,
                auto_triggered,
            } => {
                let outcome = self.app.record_use_case.record(RecordRequest {
                    date,
                    draft,
                    auto_triggered,
                })?;
                print_outcome(&outcome);
                Ok(0)
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

        let result = self.dispatch(command);

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

fn print_outcome(outcome: &RecordOutcome) {
    let r = &outcome.record;
    println!("[OK] Recorded to: {}", outcome.path.display());
    println!("     Time: {}", r.timestamp);
    println!("     Stage: {}", r.stage);
    println!("     Problem: {}", r.problem);
    println!(
        "     {}: {} record(s), {} min, {} resolved",
        outcome.date.format("%Y-%m-%d"),
        outcome.day.total,
        outcome.day.total_minutes,
        outcome.day.resolved
    );
}

fn print_usage() {
    eprintln!("Usage: usage-record [-h] [-i] [-s stage] [-p problem] [-t type] [options...]");
}

fn print_help() {
    println!("Usage: usage-record [-h] [-i] [-s stage] [-p problem] [-t type] [options...]");
    println!("  -h, --help             Display this help message.");
    println!("  -i, --interactive      Ask for each field (also used when neither -s nor -p is given).");
    println!("  -s, --stage <stage>    Session stage, e.g. 需求分析 / 代码编写 / 调试 / 测试.");
    println!("  -p, --problem <text>   Problem description (required).");
    println!("  -t, --type <type>      工具错误 | 理解偏差 | 执行失败 | 性能问题 | 其他 (default 其他).");
    println!("  --step <text>          Step description.");
    println!("  --solution <text>      Solution.");
    println!("  --docs <paths>         Related documents.");
    println!("  --session <id>         Session ID.");
    println!("  --time <minutes>       Time spent in minutes.");
    println!("  --priority <p>         高 | 中 | 低 (default 中).");
    println!("  --status <s>           已解决 | 待解决 | 需跟进 (default 待解决).");
    println!("  --note <text>          Note.");
    println!("  -d, --date <YYYY-MM-DD> Target date (default: today).");
    println!("  --auto-triggered       Collected by a hook: stage is optional, footer is stamped.");
    println!("  --dir <directory>      Storage directory.");
    println!("  -v, --verbose          Write debug records to the log file.");
    println!("  --generate <shell>     Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  CLAUDE_ANALYSIS_PATH   Storage directory. Default: ~/.claude/claude-analysis.");
    println!("  USAGE_LOG_STATE_DIR    Log directory root. Default: $XDG_STATE_HOME/usage-log.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_record(config.dir.as_ref().map(PathBuf::from), config.verbose)?;
    Runner { app }.run(config)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("usage-record: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}
