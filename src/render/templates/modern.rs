//! 现代模板：左侧栏放学校与考试信息，正文按 "Section A" 分区

use crate::models::layout::SpacingSettings;
use crate::models::paper::{PaperQuestion, PaperState};
use crate::models::question::QuestionType;
use crate::render::html::{escape, option_letter, section_letter};
use crate::render::sections::{print_sections, PrintSection, TRANSLATION_HEADING};
use std::fmt::Write;

pub const CSS: &str = r#"
.tpl-modern { display: flex; font-family: 'Inter', Arial, sans-serif; font-size: 13px; }
.tpl-modern aside { width: 58mm; min-height: 297mm; background: #1e293b; color: #f8fafc; padding: 40px 24px; }
.tpl-modern aside .school-first { font-size: 26px; font-weight: 800; text-transform: uppercase; }
.tpl-modern aside .school-rest { font-size: 16px; font-weight: 300; text-transform: uppercase; margin-bottom: 32px; }
.tpl-modern aside dl { margin: 0; }
.tpl-modern aside dt { font-size: 10px; text-transform: uppercase; letter-spacing: 1px; color: #94a3b8; margin-top: 16px; }
.tpl-modern aside dd { margin: 2px 0 0 0; font-size: 13px; }
.tpl-modern main { flex: 1; padding: 40px 32px; }
.tpl-modern main h2 { font-size: 22px; border-bottom: 3px solid #1e293b; padding-bottom: 6px; }
.tpl-modern h3 { font-size: 14px; text-transform: uppercase; color: #1e293b; margin-bottom: 8px; }
.tpl-modern ol { list-style: none; padding-left: 0; }
.tpl-modern .num { font-weight: bold; margin-right: 6px; }
.tpl-modern .marks { color: #6b7280; font-weight: normal; }
.tpl-modern .options { display: grid; grid-template-columns: 1fr 1fr; padding-left: 22px; margin-top: 2px; }
"#;

/// 学校名拆成首词和其余部分
fn split_school_name(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (name, ""),
    }
}

fn title(section: &PrintSection<'_>) -> String {
    match section.section {
        QuestionType::Mcq => "Multiple Choice".to_string(),
        QuestionType::Short => format!("Short Questions (Attempt any {})", section.attempt_label),
        QuestionType::Long => format!("Long Questions (Attempt any {})", section.attempt_label),
        QuestionType::Translation => TRANSLATION_HEADING.to_string(),
        QuestionType::Custom => "Additional Questions".to_string(),
    }
}

fn item(out: &mut String, number: usize, question: &PaperQuestion, gap: u32) {
    let _ = write!(
        out,
        "<li style=\"margin-bottom:{}px\"><div class=\"row\"><span><span class=\"num\">{}.</span>{}</span><span class=\"marks\">[{}]</span></div>",
        gap,
        number,
        escape(question.original_question.text()),
        question.marks
    );
    if let Some(options) = question.original_question.options() {
        out.push_str("<div class=\"options\">");
        for (i, option) in options.iter().enumerate() {
            let _ = write!(out, "<span>({}) {}</span>", option_letter(i), escape(option));
        }
        out.push_str("</div>");
    }
    out.push_str("</li>");
}

pub fn render(paper: &PaperState, spacing: &SpacingSettings) -> String {
    let s = &paper.settings;
    let (first, rest) = split_school_name(&s.school_name);
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"sheet tpl-modern\"><aside><div class=\"school-first\">{}</div><div class=\"school-rest\">{}</div><dl><dt>Instructor</dt><dd>{}</dd><dt>Date</dt><dd>{}</dd><dt>Duration</dt><dd>{}</dd></dl></aside><main><h2 style=\"margin-bottom:{}px\">{}</h2>",
        escape(first),
        escape(rest),
        escape(&s.teacher_name),
        escape(&s.date),
        escape(&s.duration),
        spacing.after_header,
        escape(&s.paper_title)
    );

    for (index, section) in print_sections(paper).iter().enumerate() {
        let rtl = section.section == QuestionType::Translation;
        let _ = write!(
            out,
            "<section class=\"{}\" style=\"margin-bottom:{}px\"><h3>Section {}: {}</h3><ol>",
            if rtl { "rtl" } else { "" },
            section.spacing_after(spacing),
            section_letter(index),
            escape(&title(section))
        );
        for (i, question) in section.items.iter().enumerate() {
            item(&mut out, i + 1, question, section.item_spacing(spacing));
        }
        out.push_str("</ol></section>");
    }
    out.push_str("</main></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_school_name() {
        assert_eq!(split_school_name("Govt High School"), ("Govt", "High School"));
        assert_eq!(split_school_name("  Academy  "), ("Academy", ""));
        assert_eq!(split_school_name(""), ("", ""));
    }
}
