//! HTML 拼接辅助函数

use std::fmt::Write;

/// 转义 HTML 特殊字符
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 选项字母：a, b, c ...
pub fn option_letter(index: usize) -> char {
    char::from(b'a' + (index % 26) as u8)
}

/// 分区字母：A, B, C ...
pub fn section_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

/// 基础样式：A4 纸张，无页边距
const BASE_CSS: &str = r#"
@page { size: A4; margin: 0; }
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; background: #ffffff; }
.sheet { width: 210mm; min-height: 297mm; background: #ffffff; color: #000000; font-family: Lora, Georgia, serif; }
.row { display: flex; justify-content: space-between; align-items: baseline; gap: 12px; }
.marks { font-weight: bold; white-space: nowrap; }
.muted { color: #6b7280; }
.rtl { direction: rtl; text-align: right; font-family: 'Noto Nastaliq Urdu', serif; }
h1, h2, h3, h4, p { margin: 0; }
ol, ul { margin: 0; }
"#;

/// 包装成完整的 HTML 文档
pub fn document(title: &str, css: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        BASE_CSS,
        css,
        body
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("ترجمہ"), "ترجمہ");
    }

    #[test]
    fn test_letters() {
        assert_eq!(option_letter(0), 'a');
        assert_eq!(option_letter(3), 'd');
        assert_eq!(section_letter(2), 'C');
    }
}
