//! 组卷会话
//!
//! 每次组卷由一个显式创建的 `PaperBuilder` 独占一份 `PaperState`，
//! 所有修改都经过 `reduce`。

use crate::engine::action::PaperAction;
use crate::engine::reducer::reduce;
use crate::engine::totals::{section_totals, total_marks, SectionTotal};
use crate::models::paper::{PaperState, SettingsPatch};
use crate::models::question::{CustomQuestion, Question, QuestionType};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PaperBuilder {
    paper: PaperState,
}

impl PaperBuilder {
    /// 以默认抬头和空题目列表开始
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paper(&self) -> &PaperState {
        &self.paper
    }

    pub fn into_paper(self) -> PaperState {
        self.paper
    }

    /// 执行一个操作，整体替换状态
    pub fn dispatch(&mut self, action: PaperAction) {
        debug!("组卷操作: {}", action.kind());
        let current = std::mem::take(&mut self.paper);
        self.paper = reduce(current, action);
    }

    /// 最后加入的题目的 paper_id
    fn last_paper_id(&self) -> String {
        self.paper
            .questions
            .last()
            .map(|q| q.paper_id.clone())
            .unwrap_or_default()
    }

    /// 加入题库题目，返回新的 paper_id
    pub fn add_question(&mut self, question: Question) -> String {
        self.dispatch(PaperAction::AddQuestion(question));
        self.last_paper_id()
    }

    pub fn remove_question(&mut self, paper_id: &str) {
        self.dispatch(PaperAction::RemoveQuestion {
            paper_id: paper_id.to_string(),
        });
    }

    pub fn update_question_marks(&mut self, paper_id: &str, marks: i32) {
        self.dispatch(PaperAction::UpdateMarks {
            paper_id: paper_id.to_string(),
            marks,
        });
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.dispatch(PaperAction::UpdateSettings(patch));
    }

    pub fn update_attempt_rule(&mut self, section: QuestionType, attempt: u32) {
        self.dispatch(PaperAction::UpdateAttemptRule { section, attempt });
    }

    /// 加入自定义题目，返回新的 paper_id
    pub fn add_custom_question(&mut self, custom: CustomQuestion) -> String {
        self.dispatch(PaperAction::AddCustomQuestion(custom));
        self.last_paper_id()
    }

    pub fn total_marks(&self) -> i64 {
        total_marks(&self.paper)
    }

    pub fn section_totals(&self) -> Vec<SectionTotal> {
        section_totals(&self.paper)
    }

    /// 已加入试卷的题库题目 id（用于标记"已添加"）
    pub fn added_question_ids(&self) -> Vec<&str> {
        self.paper
            .questions
            .iter()
            .map(|q| q.original_question.id())
            .collect()
    }

    /// 题库题目在试卷中第一次出现的 paper_id
    pub fn paper_id_of(&self, question_id: &str) -> Option<&str> {
        self.paper
            .questions
            .iter()
            .find(|q| q.original_question.id() == question_id)
            .map(|q| q.paper_id.as_str())
    }
}
