//! 打印用的分区视图

use crate::models::layout::SpacingSettings;
use crate::models::paper::{PaperQuestion, PaperState};
use crate::models::question::QuestionType;

/// 翻译题的固定标题
pub const TRANSLATION_HEADING: &str = "سوال: ترجمہ کریں";

/// 一个要打印的分区
pub struct PrintSection<'a> {
    pub section: QuestionType,
    pub items: Vec<&'a PaperQuestion>,
    /// "Attempt any N" 中的 N，无规则或 attempt 为 0 时为 "All"
    pub attempt_label: String,
}

impl PrintSection<'_> {
    /// 是否在标题中显示选做要求
    pub fn shows_attempt(&self) -> bool {
        matches!(self.section, QuestionType::Short | QuestionType::Long)
    }

    /// 分区之后的留白
    pub fn spacing_after(&self, spacing: &SpacingSettings) -> u32 {
        match self.section {
            QuestionType::Mcq => spacing.after_mcqs,
            QuestionType::Short => spacing.after_short_questions,
            QuestionType::Long | QuestionType::Translation | QuestionType::Custom => {
                spacing.after_long_questions
            }
        }
    }

    /// 题目之间的间距
    pub fn item_spacing(&self, spacing: &SpacingSettings) -> u32 {
        match self.section {
            QuestionType::Mcq => spacing.mcq_item_spacing,
            _ => spacing.question_item_spacing,
        }
    }
}

/// 按固定顺序（mcq, short, long, translation, custom）列出非空分区
pub fn print_sections(paper: &PaperState) -> Vec<PrintSection<'_>> {
    QuestionType::ALL
        .iter()
        .filter_map(|&section| {
            let items: Vec<&PaperQuestion> = paper
                .questions
                .iter()
                .filter(|q| q.section == section)
                .collect();
            if items.is_empty() {
                return None;
            }
            let attempt_label = paper
                .attempt_rules
                .get(&section)
                .filter(|r| r.attempt > 0)
                .map(|r| r.attempt.to_string())
                .unwrap_or_else(|| "All".to_string());
            Some(PrintSection {
                section,
                items,
                attempt_label,
            })
        })
        .collect()
}
