//! 単体で開ける HTML ページのテンプレート

use chrono::NaiveDateTime;

use crate::inline::escape_html;

const GENERATOR: &str = "Generated by usage-log md-html";

pub fn render_page(title: &str, body: &str, generated_at: NaiveDateTime) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --primary-color: #2563eb;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
            --border-color: #e2e8f0;
        }}
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
            padding: 20px;
        }}
        .container {{ max-width: 1200px; margin: 0 auto; }}
        h1 {{ font-size: 2.2em; margin-bottom: 20px; }}
        .card {{
            background: var(--card-bg);
            border-radius: 12px;
            padding: 24px;
            margin-bottom: 20px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
            border: 1px solid var(--border-color);
        }}
        .card h2 {{
            color: var(--primary-color);
            border-bottom: 2px solid var(--border-color);
            padding-bottom: 10px;
            margin-bottom: 20px;
        }}
        .card h3 {{ margin: 20px 0 10px 0; }}
        table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
        th, td {{ padding: 12px; text-align: left; border-bottom: 1px solid var(--border-color); }}
        th {{
            background-color: var(--bg-color);
            font-weight: 600;
            color: var(--text-secondary);
            font-size: 0.85em;
        }}
        tr:hover {{ background-color: var(--bg-color); }}
        pre {{
            background-color: #1e293b;
            color: #e2e8f0;
            padding: 16px;
            border-radius: 8px;
            overflow-x: auto;
            font-family: "Consolas", "Monaco", "Courier New", monospace;
        }}
        code {{
            background-color: #f1f5f9;
            padding: 2px 6px;
            border-radius: 4px;
            font-family: "Consolas", "Monaco", "Courier New", monospace;
            font-size: 0.9em;
        }}
        pre code {{ background: none; padding: 0; }}
        blockquote {{
            border-left: 4px solid var(--primary-color);
            padding: 16px 20px;
            margin: 20px 0;
            border-radius: 0 8px 8px 0;
        }}
        ul, ol {{ margin: 15px 0; padding-left: 30px; }}
        li {{ margin: 8px 0; }}
        .footer {{ text-align: center; padding: 40px; color: var(--text-secondary); font-size: 0.9em; }}
        @media print {{
            body {{ background: white; }}
            .card {{ break-inside: avoid; }}
        }}
    </style>
</head>
<body>
    <div class="container">
{body}
        <div class="footer">
            <p>{generator}</p>
            <p>{timestamp}</p>
        </div>
    </div>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
        generator = GENERATOR,
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_page_has_title_body_and_footer() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let page = render_page("A & B", "<p>x</p>", at);
        assert!(page.contains("<title>A &amp; B</title>"));
        assert!(page.contains("<p>x</p>"));
        assert!(page.contains(GENERATOR));
        assert!(page.contains("2024-01-15 08:00:00"));
        assert!(page.contains(":root {"));
    }
}
