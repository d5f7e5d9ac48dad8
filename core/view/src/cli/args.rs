use std::path::PathBuf;

use crate::domain::ViewCommand;
use chrono::NaiveDate;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::Scope;
use common::error::Error;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub verbose: bool,
    pub today: bool,
    /// -d / --date（YYYY-MM-DD、未検証）
    pub date: Option<String>,
    pub week: bool,
    pub month: bool,
    pub all: bool,
    pub stats: bool,
    pub daily: bool,
    pub output: Option<String>,
    pub dir: Option<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn flag(id: &'static str, short: char, help: &'static str) -> clap::Arg {
    clap::Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("usage-view")
        .about("Show, summarize and export session records")
        .disable_help_flag(true)
        .arg(flag("help", 'h', "Print help"))
        .arg(flag("today", 't', "Records of today (default)"))
        .arg(
            clap::Arg::new("date")
                .short('d')
                .long("date")
                .value_name("YYYY-MM-DD")
                .help("Records of the given date")
                .num_args(1),
        )
        .arg(flag("week", 'w', "Records of this ISO week"))
        .arg(flag("month", 'm', "Records of this month"))
        .arg(flag("all", 'a', "All records"))
        .group(
            clap::ArgGroup::new("scope")
                .args(["today", "date", "week", "month", "all"])
                .multiple(false),
        )
        .arg(
            clap::Arg::new("stats")
                .long("stats")
                .help("Show statistics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("daily")
                .long("daily")
                .help("Show per-day summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Export the selected records to a Markdown file")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("dir")
                .long("dir")
                .value_name("directory")
                .help("Storage directory (overrides CLAUDE_ANALYSIS_PATH)")
                .num_args(1),
        )
        .arg(flag("verbose", 'v', "Write debug records to the log file"))
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        today: matches.get_flag("today"),
        date: matches.get_one::<String>("date").cloned(),
        week: matches.get_flag("week"),
        month: matches.get_flag("month"),
        all: matches.get_flag("all"),
        stats: matches.get_flag("stats"),
        daily: matches.get_flag("daily"),
        output: matches.get_one::<String>("output").cloned(),
        dir: matches.get_one::<String>("dir").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "usage-view", &mut std::io::stdout());
}

fn config_to_scope(config: &Config) -> Result<Scope, Error> {
    if let Some(d) = &config.date {
        let date = NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|_| {
            Error::invalid_argument(format!("invalid date '{}' (expected YYYY-MM-DD)", d))
        })?;
        return Ok(Scope::Date(date));
    }
    Ok(if config.week {
        Scope::ThisWeek
    } else if config.month {
        Scope::ThisMonth
    } else if config.all {
        Scope::All
    } else {
        Scope::Today
    })
}

/// Config を ViewCommand に変換する（範囲指定なしは今日）
pub fn config_to_command(config: &Config) -> Result<ViewCommand, Error> {
    if config.help {
        return Ok(ViewCommand::Help);
    }
    let scope = config_to_scope(config)?;
    Ok(match &config.output {
        Some(out) => ViewCommand::Export {
            scope,
            output: PathBuf::from(out),
        },
        None => ViewCommand::Show {
            scope,
            stats: config.stats,
            daily: config.daily,
        },
    })
}
