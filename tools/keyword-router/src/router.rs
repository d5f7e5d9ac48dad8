//! プロンプト中のキーワードから呼び出すスキルを決める
//!
//! 入出力はフックの JSON 形式。判定は常に "continue"（処理を止めない）。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 既定のスキル名
pub const OBSERVER_SKILL: &str = "usage-observer";

/// 既定のキーワード（大文字小文字は区別しない部分一致）
const OBSERVER_KEYWORDS: &[&str] = &[
    "错误", "失败", "问题", "报错", "不对", "错了", "有问题",
    "超时", "无法", "不能", "异常", "崩溃", "卡住", "慢",
    "error", "exception", "bug", "failed", "fail", "wrong",
    "issue", "crash", "timeout", "broken", "not working",
    "doesn't work", "isn't working",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionParams {
    pub user_input: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    pub skill: String,
    pub params: ActionParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookOutput {
    pub decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HookOutput {
    pub fn actions(actions: Vec<Action>) -> Self {
        Self {
            decision: "continue".to_string(),
            actions: Some(actions),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            decision: "continue".to_string(),
            actions: None,
            error: Some(message.into()),
        }
    }
}

/// スキル名 → キーワード一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules {
    rules: BTreeMap<String, Vec<String>>,
}

impl KeywordRules {
    pub fn builtin() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            OBSERVER_SKILL.to_string(),
            OBSERVER_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        );
        Self { rules }
    }

    /// `{"skill": ["kw", ...], ...}` 形式の JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let rules: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self { rules })
    }

    /// キーワードが 1 つでも含まれるスキル（スキル名順）
    pub fn matching_skills(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .filter(|(_, keywords)| {
                keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .any(|k| !k.is_empty() && lower.contains(&k))
            })
            .map(|(skill, _)| skill.as_str())
            .collect()
    }
}

/// 生の入力を振り分ける。入力が壊れていればエラー出力と終了コード 1
pub fn route(rules: &KeywordRules, raw: &str) -> (HookOutput, i32) {
    let input: HookInput = match serde_json::from_str(raw) {
        Ok(i) => i,
        Err(e) => return (HookOutput::error(format!("Invalid JSON input: {}", e)), 1),
    };
    let actions = rules
        .matching_skills(&input.prompt)
        .into_iter()
        .map(|skill| Action {
            kind: "skill".to_string(),
            skill: skill.to_string(),
            params: ActionParams {
                user_input: input.prompt.clone(),
                session_id: input.session_id.clone(),
            },
        })
        .collect();
    (HookOutput::actions(actions), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_value(out: &HookOutput) -> serde_json::Value {
        serde_json::to_value(out).unwrap()
    }

    #[test]
    fn test_match_adds_observer_action() {
        let (out, code) = route(
            &KeywordRules::builtin(),
            r#"{"prompt":"The build FAILED again","sessionId":"s-1"}"#,
        );
        assert_eq!(code, 0);
        assert_eq!(
            to_value(&out),
            json!({
                "decision": "continue",
                "actions": [{
                    "type": "skill",
                    "skill": "usage-observer",
                    "params": {"user_input": "The build FAILED again", "session_id": "s-1"}
                }]
            })
        );
    }

    #[test]
    fn test_chinese_keyword() {
        let (out, _) = route(&KeywordRules::builtin(), r#"{"prompt":"运行超时了"}"#);
        let actions = out.actions.unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].params.session_id, "");
    }

    #[test]
    fn test_no_match_and_missing_fields() {
        let (out, code) = route(&KeywordRules::builtin(), r#"{"prompt":"add a button"}"#);
        assert_eq!(code, 0);
        assert_eq!(to_value(&out), json!({"decision": "continue", "actions": []}));

        let (out, code) = route(&KeywordRules::builtin(), "{}");
        assert_eq!(code, 0);
        assert_eq!(out.actions, Some(vec![]));
    }

    #[test]
    fn test_invalid_json() {
        let (out, code) = route(&KeywordRules::builtin(), "not json");
        assert_eq!(code, 1);
        assert_eq!(out.decision, "continue");
        assert!(out.actions.is_none());
        assert!(out.error.unwrap().starts_with("Invalid JSON input: "));
    }

    #[test]
    fn test_custom_rules() {
        let rules = KeywordRules::from_json(r#"{"perf-skill": ["Slow", "latency"], "empty": [""]}"#).unwrap();
        assert_eq!(rules.matching_skills("so slow today"), vec!["perf-skill"]);
        assert!(rules.matching_skills("error").is_empty());
        assert!(KeywordRules::from_json("[1,2]").is_err());
    }

    #[test]
    fn test_output_keeps_non_ascii() {
        let (out, _) = route(&KeywordRules::builtin(), r#"{"prompt":"有问题"}"#);
        let s = serde_json::to_string(&out).unwrap();
        assert!(s.contains("有问题"));
    }
}
