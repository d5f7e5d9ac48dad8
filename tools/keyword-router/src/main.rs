//! keyword-router: フック入力（stdin の JSON）を読み、呼び出すスキルを stdout に JSON で返す

mod router;

use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::builder::ArgAction;
use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use router::{route, HookOutput, KeywordRules};

fn build_clap_command() -> clap::Command {
    clap::Command::new("keyword-router")
        .about("Suggest skills for a prompt (hook: JSON on stdin, JSON on stdout)")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("rules")
                .long("rules")
                .value_name("file")
                .help("JSON file mapping skill names to keyword lists")
                .num_args(1),
        )
}

fn print_help() {
    println!("Usage: echo '{{\"prompt\":\"...\",\"sessionId\":\"...\"}}' | keyword-router [--rules file]");
    println!("  -h, --help       Display this help message.");
    println!("  --rules <file>   JSON object {{\"skill\": [\"keyword\", ...]}} replacing the built-in map.");
}

fn load_rules(fs: &dyn FileSystem, path: Option<PathBuf>) -> Result<KeywordRules, Error> {
    match path {
        None => Ok(KeywordRules::builtin()),
        Some(p) => {
            let content = fs.read_to_string(&p)?;
            KeywordRules::from_json(&content)
                .map_err(|e| Error::json(format!("invalid rules file {}: {}", p.display(), e)))
        }
    }
}

fn logger(fs: &Arc<dyn FileSystem>) -> Arc<dyn Log> {
    let dirs = match StdEnvResolver.resolve_dirs(None) {
        Ok(d) => d,
        Err(_) => return Arc::new(NoopLog),
    };
    match fs.create_dir_all(&dirs.logs_dir()) {
        Ok(()) => Arc::new(FileJsonLog::new(Arc::clone(fs), dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    }
}

/// 出力 JSON と終了コード。設定・入力の失敗も JSON で返す（フックを止めない）
fn run(fs: &dyn FileSystem) -> (Option<HookOutput>, i32) {
    let matches = match build_clap_command().try_get_matches() {
        Ok(m) => m,
        Err(e) => return (Some(HookOutput::error(e.to_string())), 1),
    };
    if matches.get_flag("help") {
        print_help();
        return (None, 0);
    }
    let rules = match load_rules(fs, matches.get_one::<String>("rules").map(PathBuf::from)) {
        Ok(r) => r,
        Err(e) => return (Some(HookOutput::error(e.to_string())), 1),
    };

    let mut raw = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut raw) {
        return (Some(HookOutput::error(e.to_string())), 1);
    }
    let raw = match String::from_utf8(raw) {
        Ok(s) => s,
        Err(e) => return (Some(HookOutput::error(format!("Invalid JSON input: {}", e))), 1),
    };
    let (output, code) = route(&rules, &raw);
    (Some(output), code)
}

fn main() {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log = logger(&fs);
    log.emit(
        LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("command", "route"),
    );

    let (output, code) = run(fs.as_ref());
    if let Some(output) = output {
        match serde_json::to_string(&output) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("keyword-router: {}", e),
        }
        let skills: Vec<String> = output
            .actions
            .iter()
            .flatten()
            .map(|a| a.skill.clone())
            .collect();
        let mut finished = LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("command", "route")
            .field("exit_code", code)
            .field("skills", skills);
        if let Some(err) = &output.error {
            finished = finished.field("error", err.clone());
        }
        log.emit(finished);
    }
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_rules_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{"debugger": ["panic"]}"#).unwrap();
        let rules = load_rules(&StdFileSystem, Some(path)).unwrap();
        assert_eq!(rules.matching_skills("thread panicked"), vec!["debugger"]);
    }

    #[test]
    fn test_load_rules_errors() {
        let dir = tempdir().unwrap();
        assert!(load_rules(&StdFileSystem, Some(dir.path().join("none.json"))).is_err());
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{").unwrap();
        let err = load_rules(&StdFileSystem, Some(bad)).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(load_rules(&StdFileSystem, None).unwrap(), KeywordRules::builtin());
    }
}
