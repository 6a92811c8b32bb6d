//! 组卷状态机
//!
//! `reduce` 是纯函数：除了新生成的 id 以外，相同输入总是得到相同输出。
//! 找不到 `paper_id` 的操作静默忽略，不报错也不记日志。

use crate::engine::action::PaperAction;
use crate::models::paper::{AttemptRule, PaperQuestion, PaperState};
use crate::models::question::{
    CustomQuestion, Difficulty, McqQuestion, Question, QuestionBase, QuestionType,
};
use uuid::Uuid;

/// 大题的分值下限（严格大于）
const LONG_MARKS_THRESHOLD: i32 = 4;

/// 按题目内容判定分区
///
/// 依次匹配：有选项 → mcq；题干含 "translate"（不区分大小写）→ translation；
/// 分值 > 4 → long；其余 → short。
pub fn classify(question: &Question) -> QuestionType {
    if question.options().is_some() {
        return QuestionType::Mcq;
    }
    if question.text().to_lowercase().contains("translate") {
        return QuestionType::Translation;
    }
    if question.marks() > LONG_MARKS_THRESHOLD {
        return QuestionType::Long;
    }
    QuestionType::Short
}

/// 生成试卷内唯一的题目 id
pub fn new_paper_id() -> String {
    format!("pq-{}", Uuid::new_v4())
}

fn new_custom_id() -> String {
    format!("custom-{}", Uuid::new_v4())
}

/// 由自定义输入合成题目：只有 mcq 才带选项
pub fn custom_to_question(custom: &CustomQuestion) -> Question {
    let base = QuestionBase {
        id: new_custom_id(),
        text: custom.text.clone(),
        marks: custom.marks,
        page: 0,
        difficulty: Difficulty::Medium,
    };
    if custom.section == QuestionType::Mcq {
        Question::Mcq(McqQuestion {
            base,
            options: custom.options.clone(),
            answer: String::new(),
        })
    } else {
        Question::Plain(base)
    }
}

fn place(question: Question, section: QuestionType) -> PaperQuestion {
    let marks = question.marks();
    PaperQuestion {
        paper_id: new_paper_id(),
        original_question: question,
        section,
        marks,
    }
}

/// 状态转移
pub fn reduce(mut state: PaperState, action: PaperAction) -> PaperState {
    match action {
        PaperAction::AddQuestion(question) => {
            let section = classify(&question);
            state.questions.push(place(question, section));
        }
        PaperAction::RemoveQuestion { paper_id } => {
            state.questions.retain(|q| q.paper_id != paper_id);
        }
        PaperAction::UpdateMarks { paper_id, marks } => {
            if let Some(q) = state.questions.iter_mut().find(|q| q.paper_id == paper_id) {
                q.marks = marks;
            }
        }
        PaperAction::UpdateSettings(patch) => {
            state.settings = state.settings.merged(patch);
        }
        PaperAction::UpdateAttemptRule { section, attempt } => {
            let total = state.section_count(section);
            state
                .attempt_rules
                .insert(section, AttemptRule { total, attempt });
        }
        PaperAction::AddCustomQuestion(custom) => {
            let question = custom_to_question(&custom);
            state.questions.push(place(question, custom.section));
        }
    }
    state
}
