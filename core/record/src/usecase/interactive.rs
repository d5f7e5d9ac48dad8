//! 対話モード: 質問を順に出して RecordDraft を組み立てる
//!
//! 保存自体は RecordUseCase に任せる。確認で断られた場合は None。

use std::sync::Arc;

use common::domain::{non_blank, parse_minutes, Priority, ProblemType, RecordDraft, Status};
use common::error::Error;

use crate::domain::{choose, confirmed};
use crate::ports::outbound::Prompt;

pub struct InteractiveUseCase {
    prompt: Arc<dyn Prompt>,
}

impl InteractiveUseCase {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }

    /// 自由入力。空なら既定値（prefill）を使う
    fn text(&self, question: &str, default: Option<String>) -> Result<Option<String>, Error> {
        let q = match &default {
            Some(d) => format!("{} [{}]: ", question, d),
            None => format!("{}: ", question),
        };
        let answer = self.prompt.ask(&q)?;
        Ok(non_blank(Some(answer)).or(default))
    }

    fn menu<T: Copy>(
        &self,
        title: &str,
        options: &[T],
        label: fn(&T) -> &'static str,
        default: T,
    ) -> Result<T, Error> {
        let items: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {}", i + 1, label(o)))
            .collect();
        self.prompt.say("");
        self.prompt.say(&format!("{}: {}", title, items.join("  ")));
        let default_no = options
            .iter()
            .position(|o| label(o) == label(&default))
            .map(|i| i + 1)
            .unwrap_or(1);
        let answer = self.prompt.ask(&format!(
            "   Choose (1-{}, default {}): ",
            options.len(),
            default_no
        ))?;
        Ok(choose(&answer, options, default))
    }

    pub fn collect(&self, prefill: RecordDraft) -> Result<Option<RecordDraft>, Error> {
        self.prompt.say("=== Session record (interactive) ===");
        self.prompt.say("");

        let stage = self.text("1. Stage (e.g. 需求分析/代码编写/调试/测试)", prefill.stage)?;
        let problem = self.text("2. Problem", prefill.problem)?;
        let step = self.text("3. Step (optional)", prefill.step)?;
        let problem_type = self.menu(
            "4. Type",
            &ProblemType::ALL,
            ProblemType::label,
            prefill.problem_type.unwrap_or_default(),
        )?;
        let solution = self.text("5. Solution (optional)", prefill.solution)?;
        let docs = self.text("6. Related docs (optional)", prefill.docs)?;
        let session = self.text("7. Session ID (optional)", prefill.session)?;
        let time_spent_minutes = self
            .text(
                "8. Time spent in minutes (optional)",
                prefill.time_spent_minutes.map(|m| m.to_string()),
            )?
            .and_then(|t| parse_minutes(&t));
        let priority = self.menu(
            "9. Priority",
            &Priority::ALL,
            Priority::label,
            prefill.priority.unwrap_or_default(),
        )?;
        let status = self.menu(
            "10. Status",
            &Status::ALL,
            Status::label,
            prefill.status.unwrap_or_default(),
        )?;
        let note = self.text("11. Note (optional)", prefill.note)?;

        let draft = RecordDraft {
            stage,
            step,
            problem,
            problem_type: Some(problem_type),
            solution,
            docs,
            session,
            time_spent_minutes,
            priority: Some(priority),
            status: Some(status),
            note,
        };

        self.prompt.say("");
        self.prompt.say("--- Confirm ---");
        for (key, value) in summary_lines(&draft) {
            self.prompt.say(&format!("  {}: {}", key, value));
        }
        let answer = self.prompt.ask("\nSave? (Y/n): ")?;
        Ok(confirmed(&answer).then_some(draft))
    }
}

/// 確認表示用（値のある項目だけ）
fn summary_lines(d: &RecordDraft) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    let mut push = |k: &'static str, v: Option<String>| {
        if let Some(v) = v {
            out.push((k, v));
        }
    };
    push("stage", d.stage.clone());
    push("problem", d.problem.clone());
    push("step", d.step.clone());
    push("type", d.problem_type.map(|t| t.label().to_string()));
    push("solution", d.solution.clone());
    push("docs", d.docs.clone());
    push("session", d.session.clone());
    push("time", d.time_spent_minutes.map(|m| format!("{} min", m)));
    push("priority", d.priority.map(|p| p.label().to_string()));
    push("status", d.status.map(|s| s.label().to_string()));
    push("note", d.note.clone());
    out
}
