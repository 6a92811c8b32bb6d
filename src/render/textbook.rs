//! 课本单元导出：每页一张 A4，带页眉（单元号、标题、年级）和页码

use crate::content::NumberedPage;
use crate::models::content::{value_label, ContentBlock, RichText, TextbookUnit};
use crate::render::html::{document, escape};
use regex::Regex;
use std::fmt::Write;

const CSS: &str = r#"
.tb-page { position: relative; display: flex; flex-direction: column; padding: 16px; font-family: Arial, sans-serif; page-break-after: always; }
.tb-page:last-child { page-break-after: auto; }
.tb-bar { display: flex; align-items: center; justify-content: space-between; height: 32px; background: #52525b; color: #fff; padding: 0 10px; font-weight: bold; }
.tb-bar .tag { display: flex; border-top: 1px solid #fff; border-bottom: 1px solid #fff; }
.tb-bar .tag span { padding: 0 8px; letter-spacing: 2px; }
.tb-bar .tag .num { background: #fff; color: #27272a; letter-spacing: 0; }
.tb-bar .title { letter-spacing: 3px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.tb-body { flex: 1; border-left: 1px dotted #d4d4d8; border-right: 1px dotted #d4d4d8; padding: 16px 24px; font-size: 11pt; line-height: 1.35; text-align: justify; }
.tb-footer { display: flex; align-items: center; height: 40px; }
.tb-footer hr { flex: 1; border: 0; border-top: 2px solid #52525b; }
.tb-footer .page-no { width: 28px; height: 28px; margin: 0 16px; border: 2px solid #52525b; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-weight: bold; }
.tb-unit-header { display: flex; align-items: center; gap: 16px; border-bottom: 4px solid #1e293b; padding-bottom: 8px; margin-bottom: 16px; }
.tb-unit-header .badge { background: #64748b; color: #fff; border-radius: 32px; padding: 8px 16px; font-weight: bold; font-size: 24px; }
.tb-unit-header h1 { font-size: 32px; }
.tb-aside { float: right; width: 33%; margin-left: 16px; padding: 8px; border: 1px solid #94a3b8; background: #f1f5f9; border-radius: 6px; font-size: 9pt; }
.tb-image { margin: 16px 0; padding: 16px; height: 160px; display: flex; align-items: center; justify-content: center; background: #f1f5f9; border: 1px dashed #cbd5e1; font-style: italic; color: #64748b; }
.tb-box { margin: 16px 0; border: 1px solid #cbd5e1; border-radius: 8px; }
.tb-box .dark { background: #1e293b; color: #fff; padding: 4px 16px; }
.tb-box .inner { padding: 16px; }
.tb-arabic { margin: 8px 0; text-align: center; }
.tb-arabic p:first-child { font-size: 20pt; direction: rtl; }
.tb-arabic p:last-child { font-size: 9pt; font-style: italic; color: #64748b; }
.tb-glossary { margin: 16px 0; border: 1px solid #94a3b8; }
.tb-glossary h4 { background: #1e293b; color: #fff; padding: 8px 16px; }
.tb-glossary table { width: 100%; border-collapse: collapse; }
.tb-glossary th, .tb-glossary td { padding: 6px; text-align: left; border-bottom: 1px solid #e2e8f0; }
.tb-unsupported { margin: 8px 0; padding: 8px; background: #fee2e2; color: #b91c1c; }
blockquote { margin: 8px 0; padding-left: 16px; font-style: italic; color: #475569; }
"#;

/// 从年级 id 中取出年级数字，例如 `class-9` 得到 `9`
pub fn class_number(class_id: &str) -> String {
    if let Ok(re) = Regex::new(r"\d+") {
        if let Some(m) = re.find(class_id) {
            return m.as_str().to_string();
        }
    }
    String::new()
}

fn rich_text(out: &mut String, content: Option<&RichText>, text: Option<&str>) {
    match content {
        Some(RichText::Chunks(chunks)) => {
            for chunk in chunks {
                match chunk.kind.as_deref() {
                    Some("bold") => {
                        let _ = write!(out, "<strong>{}</strong>", escape(&chunk.text));
                    }
                    Some("arabic") => {
                        let _ = write!(out, "<span dir=\"rtl\"> {} </span>", escape(&chunk.text));
                    }
                    _ => out.push_str(&escape(&chunk.text)),
                }
            }
        }
        Some(RichText::Plain(s)) => out.push_str(&escape(s)),
        None => out.push_str(&escape(text.unwrap_or_default())),
    }
}

fn block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::UnitHeader { unit, title } => {
            let _ = write!(
                out,
                "<div class=\"tb-unit-header\"><span class=\"badge\">UNIT {}</span><h1>{}</h1></div>",
                escape(&value_label(unit)),
                escape(title)
            );
        }
        ContentBlock::Heading { level, text } => {
            let level = level.unwrap_or(1).clamp(1, 6);
            let _ = write!(out, "<h{0}>{1}</h{0}>", level, escape(text));
        }
        ContentBlock::Paragraph { content, text } => {
            out.push_str("<p>");
            rich_text(out, content.as_ref(), text.as_deref());
            out.push_str("</p>");
        }
        ContentBlock::Quote { content, text } => {
            out.push_str("<blockquote>");
            rich_text(out, content.as_ref(), text.as_deref());
            out.push_str("</blockquote>");
        }
        ContentBlock::ParagraphWithAside {
            content,
            text,
            aside,
        } => {
            let _ = write!(out, "<div class=\"tb-aside\">{}</div><p>", escape(&aside.text));
            rich_text(out, content.as_ref(), text.as_deref());
            out.push_str("</p>");
        }
        ContentBlock::Image { alt } => {
            let alt = alt
                .as_deref()
                .filter(|a| !a.is_empty())
                .unwrap_or("No description provided");
            let _ = write!(out, "<div class=\"tb-image\">[Image: {}]</div>", escape(alt));
        }
        ContentBlock::Callout {
            title,
            header_style,
            content,
            list,
        } => {
            let dark = header_style.as_deref() == Some("dark");
            out.push_str("<div class=\"tb-box\">");
            if let (true, Some(title)) = (dark, title) {
                let _ = write!(out, "<h4 class=\"dark\">{}</h4>", escape(title));
            }
            out.push_str("<div class=\"inner\">");
            if let (false, Some(title)) = (dark, title) {
                let _ = write!(out, "<h4>{}</h4>", escape(title));
            }
            if content.is_some() {
                out.push_str("<div>");
                rich_text(out, content.as_ref(), None);
                out.push_str("</div>");
            }
            if let Some(list) = list {
                out.push_str("<ul>");
                for item in &list.items {
                    let _ = write!(out, "<li>{}</li>", escape(item));
                }
                out.push_str("</ul>");
            }
            out.push_str("</div></div>");
        }
        ContentBlock::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let _ = write!(out, "<{}>", tag);
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            let _ = write!(out, "</{}>", tag);
        }
        ContentBlock::ArabicQuote { text, translation } => {
            let _ = write!(
                out,
                "<div class=\"tb-arabic\"><p>{}</p><p>\"{}\"</p></div>",
                escape(text),
                escape(translation.as_deref().unwrap_or_default())
            );
        }
        ContentBlock::Glossary { title, terms } => {
            let _ = write!(
                out,
                "<div class=\"tb-glossary\"><h4>{}</h4><table><thead><tr><th>Words</th><th>Meanings</th></tr></thead><tbody>",
                escape(title)
            );
            for term in terms {
                let _ = write!(
                    out,
                    "<tr><td><b>{}</b></td><td>{}</td></tr>",
                    escape(&term.word),
                    escape(&term.meaning)
                );
            }
            out.push_str("</tbody></table></div>");
        }
        ContentBlock::Unsupported => {
            out.push_str("<div class=\"tb-unsupported\">Unsupported content type</div>");
        }
    }
}

fn page(out: &mut String, unit: &TextbookUnit, class_no: &str, numbered: &NumberedPage) {
    let _ = write!(
        out,
        "<div class=\"sheet tb-page\"><div class=\"tb-bar\"><div class=\"tag\"><span>UNIT</span><span class=\"num\">{}</span></div><div class=\"title\">{}</div><div class=\"tag\"><span class=\"num\">{}</span><span>CLASS</span></div></div><div class=\"tb-body\">",
        unit.unit,
        escape(&unit.title.to_uppercase()),
        escape(class_no)
    );
    for item in &numbered.page.content {
        block(out, item);
    }
    let _ = write!(
        out,
        "</div><div class=\"tb-footer\"><hr><span class=\"page-no\">{}</span><hr></div></div>",
        numbered.number
    );
}

/// 渲染一个课本单元的全部页面
pub fn render_textbook(unit: &TextbookUnit, class_id: &str, pages: &[NumberedPage]) -> String {
    let class_no = class_number(class_id);
    let mut body = String::new();
    for numbered in pages {
        page(&mut body, unit, &class_no, numbered);
    }
    document(&format!("Unit {} - {}", unit.unit, unit.title), CSS, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::TextbookPage;

    fn unit() -> TextbookUnit {
        TextbookUnit {
            unit: 3,
            title: "The Water Cycle".to_string(),
            start_page: 12,
            end_page: 13,
        }
    }

    #[test]
    fn test_class_number() {
        assert_eq!(class_number("class-10"), "10");
        assert_eq!(class_number("grade9-science"), "9");
        assert_eq!(class_number("nursery"), "");
    }

    #[test]
    fn test_render_textbook_frame() {
        let json = r#"{"content":[
            {"type":"heading","level":2,"text":"Evaporation"},
            {"type":"paragraph","content":[{"type":"bold","text":"Heat"},{"text":" turns water into <vapour>."}]},
            {"type":"image"},
            {"type":"video","src":"a.mp4"}
        ]}"#;
        let page: TextbookPage = serde_json::from_str(json).unwrap();
        let html = render_textbook(
            &unit(),
            "class-9",
            &[NumberedPage { number: 12, page }],
        );

        assert!(html.contains("THE WATER CYCLE"));
        assert!(html.contains("<span class=\"num\">9</span><span>CLASS</span>"));
        assert!(html.contains("<span class=\"page-no\">12</span>"));
        assert!(html.contains("<h2>Evaporation</h2>"));
        assert!(html.contains("<strong>Heat</strong> turns water into &lt;vapour&gt;."));
        assert!(html.contains("[Image: No description provided]"));
        assert!(html.contains("Unsupported content type"));
    }

    #[test]
    fn test_glossary_and_list() {
        let json = r#"{"content":[
            {"type":"list","ordered":true,"items":["one","two"]},
            {"type":"glossary","title":"Glossary","terms":[{"word":"vapour","meaning":"gas form of water"}]}
        ]}"#;
        let page: TextbookPage = serde_json::from_str(json).unwrap();
        let html = render_textbook(&unit(), "class-9", &[NumberedPage { number: 13, page }]);
        assert!(html.contains("<ol><li>one</li><li>two</li></ol>"));
        assert!(html.contains("<td><b>vapour</b></td><td>gas form of water</td>"));
    }
}
