//! ユースケース単位のテスト（tempdir + 固定時刻 + 台本どおりの Prompt）

mod record_tests;

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use common::adapter::{FixedClock, NoopLog, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;

use crate::ports::outbound::Prompt;
use crate::wiring::{wire_with, App};

/// 用意した回答を順に返す Prompt。表示内容は記録しておく
#[derive(Default)]
pub(crate) struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    pub shown: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            shown: Mutex::new(Vec::new()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn say(&self, line: &str) {
        self.shown.lock().unwrap().push(line.to_string());
    }

    fn ask(&self, question: &str) -> Result<String, Error> {
        self.shown.lock().unwrap().push(question.to_string());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or_default())
    }
}

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

pub(crate) fn app(data_dir: &Path, prompt: Arc<ScriptedPrompt>) -> App {
    let dirs = Dirs {
        data_dir: data_dir.to_path_buf(),
        state_dir: data_dir.join("state"),
    };
    wire_with(
        dirs,
        Arc::new(StdFileSystem),
        Arc::new(FixedClock(today().and_hms_opt(14, 30, 0).unwrap())),
        Arc::new(NoopLog),
        prompt,
    )
}
