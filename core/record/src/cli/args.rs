use crate::domain::RecordCommand;
use chrono::NaiveDate;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{parse_minutes, Priority, ProblemType, RecordDraft, Status};
use common::error::Error;

/// CLI から受け取った生の設定（列挙値・日付は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログファイルに debug レコードも書く
    pub verbose: bool,
    pub interactive: bool,
    pub auto_triggered: bool,
    /// --dir: 記録ディレクトリ（CLAUDE_ANALYSIS_PATH より優先）
    pub dir: Option<String>,
    pub date: Option<String>,
    pub stage: Option<String>,
    pub step: Option<String>,
    pub problem: Option<String>,
    pub problem_type: Option<String>,
    pub solution: Option<String>,
    pub docs: Option<String>,
    pub session: Option<String>,
    pub time: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn value_arg(id: &'static str, long: &'static str, value_name: &'static str, help: &'static str) -> clap::Arg {
    clap::Arg::new(id)
        .long(long)
        .value_name(value_name)
        .help(help)
        .num_args(1)
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("usage-record")
        .about("Append a session record to today's Markdown table")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Ask for each field interactively")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("auto-triggered")
                .long("auto-triggered")
                .help("Record collected by a hook (stage optional)")
                .action(ArgAction::SetTrue),
        )
        .arg(value_arg("stage", "stage", "stage", "Session stage (e.g. 代码编写, 调试)").short('s'))
        .arg(value_arg("step", "step", "text", "Step description"))
        .arg(value_arg("problem", "problem", "text", "Problem description").short('p'))
        .arg(
            value_arg("type", "type", "type", "Problem type: 工具错误|理解偏差|执行失败|性能问题|其他 (or tool_error, ...)")
                .short('t'),
        )
        .arg(value_arg("solution", "solution", "text", "Solution"))
        .arg(value_arg("docs", "docs", "paths", "Related documents (comma separated)"))
        .arg(value_arg("session", "session", "id", "Session ID"))
        .arg(value_arg("time", "time", "minutes", "Time spent in minutes"))
        .arg(value_arg("priority", "priority", "priority", "Priority: 高|中|低 (or high, medium, low)"))
        .arg(value_arg("status", "status", "status", "Status: 已解决|待解决|需跟进 (or resolved, pending, follow_up)"))
        .arg(value_arg("note", "note", "text", "Note"))
        .arg(value_arg("date", "date", "YYYY-MM-DD", "Target date (default: today)").short('d'))
        .arg(value_arg("dir", "dir", "directory", "Storage directory (overrides CLAUDE_ANALYSIS_PATH)"))
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Write debug records to the log file")
                .action(ArgAction::SetTrue),
        )
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
    let s = |id: &str| matches.get_one::<String>(id).cloned();
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        interactive: matches.get_flag("interactive"),
        auto_triggered: matches.get_flag("auto-triggered"),
        dir: s("dir"),
        date: s("date"),
        stage: s("stage"),
        step: s("step"),
        problem: s("problem"),
        problem_type: s("type"),
        solution: s("solution"),
        docs: s("docs"),
        session: s("session"),
        time: s("time"),
        priority: s("priority"),
        status: s("status"),
        note: s("note"),
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

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "usage-record", &mut std::io::stdout());
}

fn parse_enum<T>(value: Option<&String>, flag: &str, parse: fn(&str) -> Option<T>, choices: &str) -> Result<Option<T>, Error> {
    match value {
        None => Ok(None),
        Some(v) => parse(v).map(Some).ok_or_else(|| {
            Error::invalid_argument(format!("invalid value '{}' for {} (choose from {})", v, flag, choices))
        }),
    }
}

fn parse_date(value: Option<&String>) -> Result<Option<NaiveDate>, Error> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| {
                Error::invalid_argument(format!("invalid date '{}' (expected YYYY-MM-DD)", v))
            })
        })
        .transpose()
}

fn config_to_draft(config: &Config) -> Result<RecordDraft, Error> {
    Ok(RecordDraft {
        stage: config.stage.clone(),
        step: config.step.clone(),
        problem: config.problem.clone(),
        problem_type: parse_enum(
            config.problem_type.as_ref(),
            "--type",
            ProblemType::parse,
            "工具错误, 理解偏差, 执行失败, 性能问题, 其他",
        )?,
        solution: config.solution.clone(),
        docs: config.docs.clone(),
        session: config.session.clone(),
        // 数値でなければ未設定（ファイル上は "-"）
        time_spent_minutes: config.time.as_deref().and_then(parse_minutes),
        priority: parse_enum(config.priority.as_ref(), "--priority", Priority::parse, "高, 中, 低")?,
        status: parse_enum(
            config.status.as_ref(),
            "--status",
            Status::parse,
            "已解决, 待解决, 需跟进",
        )?,
        note: config.note.clone(),
    })
}

/// Config を RecordCommand に変換する
///
/// `-i` か、stage と problem の両方が無い場合（自動採取を除く）は対話モード。
pub fn config_to_command(config: &Config) -> Result<RecordCommand, Error> {
    if config.help {
        return Ok(RecordCommand::Help);
    }
    let date = parse_date(config.date.as_ref())?;
    let draft = config_to_draft(config)?;

    let nothing_given = config.stage.is_none() && config.problem.is_none();
    if config.interactive || (nothing_given && !config.auto_triggered) {
        return Ok(RecordCommand::Interactive {
            date,
            prefill: draft,
        });
    }
    Ok(RecordCommand::Append {
        date,
        draft,
        auto_triggered: config.auto_triggered,
    })
}
