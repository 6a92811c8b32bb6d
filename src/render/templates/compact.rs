//! 紧凑模板：间距减半，选择题与简答题双栏

use crate::models::layout::SpacingSettings;
use crate::models::paper::{PaperQuestion, PaperState};
use crate::models::question::QuestionType;
use crate::render::html::{escape, option_letter};
use crate::render::sections::{print_sections, PrintSection, TRANSLATION_HEADING};
use std::fmt::Write;

pub const CSS: &str = r#"
.tpl-compact { padding: 28px 32px; font-size: 12px; }
.tpl-compact header { display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 1px solid #000; padding-bottom: 4px; }
.tpl-compact header h1 { font-size: 18px; }
.tpl-compact header h2 { font-size: 14px; font-weight: normal; }
.tpl-compact .meta { display: flex; gap: 16px; font-size: 11px; margin-top: 2px; }
.tpl-compact h3 { font-size: 13px; margin-bottom: 4px; }
.tpl-compact .cols { display: grid; grid-template-columns: 1fr 1fr; column-gap: 16px; list-style: none; padding-left: 0; }
.tpl-compact .options { display: grid; grid-template-columns: 1fr 1fr; padding-left: 12px; }
"#;

fn instruction(section: &PrintSection<'_>) -> String {
    match section.section {
        QuestionType::Mcq => "Choose the correct option.".to_string(),
        QuestionType::Short => format!("Answer any {} short questions.", section.attempt_label),
        QuestionType::Long => format!("Answer any {} long questions.", section.attempt_label),
        QuestionType::Translation => TRANSLATION_HEADING.to_string(),
        QuestionType::Custom => "Answer the following questions.".to_string(),
    }
}

fn item(out: &mut String, number: usize, question: &PaperQuestion, gap: u32) {
    let _ = write!(
        out,
        "<li style=\"margin-bottom:{}px\"><div class=\"row\"><span>{}. {}</span><span class=\"marks\">({})</span></div>",
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

/// `spacing` 为用户设置的原始间距，本模板内部减半使用
pub fn render(paper: &PaperState, spacing: &SpacingSettings) -> String {
    let spacing = spacing.halved();
    let s = &paper.settings;
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"sheet tpl-compact\"><header style=\"margin-bottom:{}px\"><div><h1>{}</h1><h2>{}</h2></div><div class=\"meta\"><span>{}</span><span>{}</span><span>{}</span></div></header>",
        spacing.after_header,
        escape(&s.school_name),
        escape(&s.paper_title),
        escape(&s.teacher_name),
        escape(&s.date),
        escape(&s.duration)
    );

    for (index, section) in print_sections(paper).iter().enumerate() {
        let (class, list_class) = match section.section {
            QuestionType::Mcq | QuestionType::Short => ("", "cols"),
            QuestionType::Translation => ("rtl", ""),
            QuestionType::Long | QuestionType::Custom => ("", ""),
        };
        let _ = write!(
            out,
            "<section class=\"{}\" style=\"margin-bottom:{}px\"><h3>Q{}: {}</h3><ul class=\"{}\">",
            class,
            section.spacing_after(&spacing),
            index + 1,
            escape(&instruction(section)),
            list_class
        );
        for (i, question) in section.items.iter().enumerate() {
            item(&mut out, i + 1, question, section.item_spacing(&spacing));
        }
        out.push_str("</ul></section>");
    }
    out.push_str("</div>");
    out
}
