//! 行内書式（コード・太字・斜体）と HTML エスケープ

use regex::Regex;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// 行内書式の変換器。太字を斜体より先に当てる（区切り文字を共有するため）
pub struct InlineFormatter {
    code: Regex,
    bold_star: Regex,
    bold_underscore: Regex,
    em_star: Regex,
    em_underscore: Regex,
}

impl InlineFormatter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            code: Regex::new(r"`([^`]+)`")?,
            bold_star: Regex::new(r"\*\*([^*]+)\*\*")?,
            bold_underscore: Regex::new(r"__([^_]+)__")?,
            em_star: Regex::new(r"\*([^*]+)\*")?,
            em_underscore: Regex::new(r"_([^_]+)_")?,
        })
    }

    /// エスケープ済みの HTML 断片を返す
    pub fn format(&self, text: &str) -> String {
        let s = escape_html(text);
        let s = self.code.replace_all(&s, "<code>$1</code>");
        let s = self.bold_star.replace_all(&s, "<strong>$1</strong>");
        let s = self.bold_underscore.replace_all(&s, "<strong>$1</strong>");
        let s = self.em_star.replace_all(&s, "<em>$1</em>");
        let s = self.em_underscore.replace_all(&s, "<em>$1</em>");
        s.into_owned()
    }
}
