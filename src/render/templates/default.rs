//! 默认模板：居中抬头，"Q1:" 编号

use crate::models::layout::SpacingSettings;
use crate::models::paper::{PaperQuestion, PaperState};
use crate::models::question::QuestionType;
use crate::render::html::{escape, option_letter};
use crate::render::sections::{print_sections, PrintSection, TRANSLATION_HEADING};
use std::fmt::Write;

pub const CSS: &str = r#"
.tpl-default { padding: 48px 56px; font-size: 14px; }
.tpl-default header { text-align: center; }
.tpl-default header h1 { font-size: 24px; text-transform: uppercase; letter-spacing: 1px; }
.tpl-default header h2 { font-size: 18px; margin-top: 4px; }
.tpl-default .meta { display: flex; justify-content: space-between; margin-top: 12px; padding-bottom: 8px; border-bottom: 2px solid #000; font-size: 13px; }
.tpl-default h3 { font-size: 15px; margin-bottom: 8px; }
.tpl-default .options { display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; padding-left: 16px; margin-top: 2px; }
"#;

fn instruction(section: &PrintSection<'_>) -> String {
    match section.section {
        QuestionType::Mcq => "Choose the correct option.".to_string(),
        QuestionType::Short => format!(
            "Answer the following short questions. (Attempt any {})",
            section.attempt_label
        ),
        QuestionType::Long => format!(
            "Answer the following long questions in detail. (Attempt any {})",
            section.attempt_label
        ),
        QuestionType::Translation => TRANSLATION_HEADING.to_string(),
        QuestionType::Custom => "Answer the following questions.".to_string(),
    }
}

fn item(out: &mut String, question: &PaperQuestion, gap: u32) {
    let _ = write!(
        out,
        "<li style=\"margin-bottom:{}px\"><div class=\"row\"><span>{}</span><span class=\"marks\">({})</span></div>",
        gap,
        escape(question.original_question.text()),
        question.marks
    );
    if let Some(options) = question.original_question.options() {
        out.push_str("<div class=\"options\">");
        for (i, option) in options.iter().enumerate() {
            let _ = write!(out, "<span>{}) {}</span>", option_letter(i), escape(option));
        }
        out.push_str("</div>");
    }
    out.push_str("</li>");
}

pub fn render(paper: &PaperState, spacing: &SpacingSettings) -> String {
    let s = &paper.settings;
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"sheet tpl-default\"><header style=\"margin-bottom:{}px\"><h1>{}</h1><h2>{}</h2><div class=\"meta\"><span>Teacher: {}</span><span>Date: {}</span><span>Time: {}</span></div></header>",
        spacing.after_header,
        escape(&s.school_name),
        escape(&s.paper_title),
        escape(&s.teacher_name),
        escape(&s.date),
        escape(&s.duration)
    );

    for (index, section) in print_sections(paper).iter().enumerate() {
        let rtl = section.section == QuestionType::Translation;
        let _ = write!(
            out,
            "<section class=\"{}\" style=\"margin-bottom:{}px\"><h3>Q{}: {}</h3><ol>",
            if rtl { "rtl" } else { "" },
            section.spacing_after(spacing),
            index + 1,
            escape(&instruction(section))
        );
        for question in &section.items {
            item(&mut out, question, section.item_spacing(spacing));
        }
        out.push_str("</ol></section>");
    }
    out.push_str("</div>");
    out
}
