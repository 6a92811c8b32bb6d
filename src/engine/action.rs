use crate::models::paper::SettingsPatch;
use crate::models::question::{CustomQuestion, Question, QuestionType};

/// 组卷操作
#[derive(Debug, Clone, PartialEq)]
pub enum PaperAction {
    /// 加入题库题目，题型自动分类
    AddQuestion(Question),
    RemoveQuestion { paper_id: String },
    /// 覆盖分值，不做范围校验
    UpdateMarks { paper_id: String, marks: i32 },
    UpdateSettings(SettingsPatch),
    /// 设置选做数量，`total` 按当前分区题数重新计算
    UpdateAttemptRule { section: QuestionType, attempt: u32 },
    /// 加入自定义题目，题型由作者指定
    AddCustomQuestion(CustomQuestion),
}

impl PaperAction {
    /// 操作名称（仅用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            PaperAction::AddQuestion(_) => "add_question",
            PaperAction::RemoveQuestion { .. } => "remove_question",
            PaperAction::UpdateMarks { .. } => "update_marks",
            PaperAction::UpdateSettings(_) => "update_settings",
            PaperAction::UpdateAttemptRule { .. } => "update_attempt_rule",
            PaperAction::AddCustomQuestion(_) => "add_custom_question",
        }
    }
}
