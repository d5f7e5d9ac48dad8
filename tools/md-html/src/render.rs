//! 1 パスの行分類による Markdown → HTML 本文変換
//!
//! 対応: コードフェンス / パイプ表 / 箇条書き（`- ` `* `）/ 番号付き（`1. `〜`9. `、1 桁のみ）/
//! 見出し 1〜4 / 引用 / `---` `***`（カード区切り）/ 段落。
//! `## ` は新しいカードを開く。閉じ忘れは入力末尾でまとめて閉じる。

use crate::inline::{escape_html, InlineFormatter};

/// タイトルが無いときの既定値
pub const FALLBACK_TITLE: &str = "Analysis Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

struct Renderer<'a> {
    inline: &'a InlineFormatter,
    out: Vec<String>,
    /// コードフェンス内なら本文を貯める
    code: Option<Vec<String>>,
    list: Option<ListKind>,
    in_table: bool,
    card_open: bool,
}

impl<'a> Renderer<'a> {
    fn new(inline: &'a InlineFormatter) -> Self {
        Self {
            inline,
            out: Vec::new(),
            code: None,
            list: None,
            in_table: false,
            card_open: false,
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            self.out.push(format!("</{}>", kind.tag()));
        }
    }

    fn close_table(&mut self) {
        if self.in_table {
            self.out.push("</tbody></table>".to_string());
            self.in_table = false;
        }
    }

    fn close_card(&mut self) {
        if self.card_open {
            self.out.push("</div>".to_string());
            self.card_open = false;
        }
    }

    fn open_card(&mut self) {
        self.close_card();
        self.out.push("<div class=\"card\">".to_string());
        self.card_open = true;
    }

    fn flush_code(&mut self, body: Vec<String>) {
        let escaped: Vec<String> = body.iter().map(|l| escape_html(l)).collect();
        self.out
            .push(format!("<pre><code>{}</code></pre>", escaped.join("\n")));
    }

    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            match self.code.take() {
                Some(body) => self.flush_code(body),
                None => {
                    self.close_list();
                    self.close_table();
                    self.code = Some(Vec::new());
                }
            }
            return;
        }
        if let Some(body) = self.code.as_mut() {
            body.push(line.to_string());
            return;
        }

        if is_table_line(trimmed) {
            self.close_list();
            self.table_row(trimmed);
            return;
        }
        self.close_table();

        if let Some((kind, item)) = list_item(trimmed) {
            if self.list != Some(kind) {
                self.close_list();
                self.out.push(format!("<{}>", kind.tag()));
                self.list = Some(kind);
            }
            let li = format!("<li>{}</li>", self.inline.format(item));
            self.out.push(li);
            return;
        }
        self.close_list();

        if let Some(text) = trimmed.strip_prefix("#### ") {
            let h = format!("<h4>{}</h4>", self.inline.format(text));
            self.out.push(h);
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            let h = format!("<h3>{}</h3>", self.inline.format(text));
            self.out.push(h);
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            self.open_card();
            let h = format!("<h2>{}</h2>", self.inline.format(text));
            self.out.push(h);
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            let h = format!("<h1>{}</h1>", self.inline.format(text));
            self.out.push(h);
        } else if let Some(text) = trimmed.strip_prefix('>') {
            let q = format!("<blockquote>{}</blockquote>", self.inline.format(text.trim()));
            self.out.push(q);
        } else if trimmed == "---" || trimmed == "***" {
            self.open_card();
        } else if !trimmed.is_empty() {
            let p = format!("<p>{}</p>", self.inline.format(trimmed));
            self.out.push(p);
        }
    }

    /// 最初の行は見出し行、区切り行は捨てる。セルは行内書式にかけない
    fn table_row(&mut self, trimmed: &str) {
        if is_separator(trimmed) {
            return;
        }
        let cells: Vec<String> = trimmed
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(escape_html)
            .collect();
        if cells.is_empty() {
            return;
        }
        if self.in_table {
            let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
            self.out.push(format!("<tr>{}</tr>", tds));
        } else {
            let ths: String = cells.iter().map(|c| format!("<th>{}</th>", c)).collect();
            self.out.push("<table>".to_string());
            self.out.push(format!("<thead><tr>{}</tr></thead>", ths));
            self.out.push("<tbody>".to_string());
            self.in_table = true;
        }
    }

    fn finish(mut self) -> String {
        if let Some(body) = self.code.take() {
            self.flush_code(body);
        }
        self.close_list();
        self.close_table();
        self.close_card();
        self.out.join("\n")
    }
}

fn is_table_line(trimmed: &str) -> bool {
    trimmed.contains('|') && !trimmed.starts_with('#')
}

/// `|---|:---:|` のような区切り行
fn is_separator(trimmed: &str) -> bool {
    trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | '+' | ' '))
}

fn list_item(trimmed: &str) -> Option<(ListKind, &str)> {
    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return Some((ListKind::Unordered, rest));
    }
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 3 && (b'1'..=b'9').contains(&bytes[0]) && &bytes[1..3] == b". " {
        return Some((ListKind::Ordered, &trimmed[3..]));
    }
    None
}

/// 本文 HTML（ページテンプレートに埋め込む部分）
pub fn render_body(markdown: &str, inline: &InlineFormatter) -> String {
    let mut r = Renderer::new(inline);
    for line in markdown.lines() {
        r.feed(line);
    }
    r.finish()
}

/// 最初の `# ` 見出し。無ければ FALLBACK_TITLE
pub fn extract_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|l| l.strip_prefix("# "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(md: &str) -> String {
        render_body(md, &InlineFormatter::new().unwrap())
    }

    #[test]
    fn test_heading_and_list() {
        let html = body("# Title\n\n- a\n- b\n");
        assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
        assert_eq!(extract_title("# Title\n\n- a\n- b\n"), "Title");
        assert_eq!(extract_title("## only h2\ntext"), FALLBACK_TITLE);
    }

    #[test]
    fn test_code_fence_is_verbatim() {
        let html = body("```rust\nlet x = **y** < 1;\n```\nafter");
        assert!(html.contains("<pre><code>let x = **y** &lt; 1;</code></pre>"));
        assert!(html.ends_with("<p>after</p>"));
    }

    #[test]
    fn test_unterminated_blocks_are_closed() {
        let html = body("## Card\n1. one\n2. two");
        assert_eq!(
            html,
            "<div class=\"card\">\n<h2>Card</h2>\n<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n</div>"
        );
        let html = body("```\ncode");
        assert_eq!(html, "<pre><code>code</code></pre>");
    }

    #[test]
    fn test_ordered_list_single_digit_only() {
        let html = body("10. ten");
        assert_eq!(html, "<p>10. ten</p>");
    }

    #[test]
    fn test_table() {
        let html = body("| a | b |\n|---|:--:|\n| **1** | 2 |\n\ntext");
        assert_eq!(
            html,
            "<table>\n<thead><tr><th>a</th><th>b</th></tr></thead>\n<tbody>\n<tr><td>**1**</td><td>2</td></tr>\n</tbody></table>\n<p>text</p>"
        );
    }

    #[test]
    fn test_rule_closes_and_reopens_card() {
        let html = body("## A\ntext\n---\nmore");
        assert_eq!(
            html,
            "<div class=\"card\">\n<h2>A</h2>\n<p>text</p>\n</div>\n<div class=\"card\">\n<p>more</p>\n</div>"
        );
    }

    #[test]
    fn test_second_h2_closes_previous_card() {
        let html = body("## A\n## B");
        assert_eq!(html.matches("<div class=\"card\">").count(), 2);
        assert_eq!(html.matches("</div>").count(), 2);
    }

    #[test]
    fn test_blockquote_and_headings() {
        let html = body("> *note*\n### h3\n#### h4");
        assert_eq!(
            html,
            "<blockquote><em>note</em></blockquote>\n<h3>h3</h3>\n<h4>h4</h4>"
        );
    }
}
