//! 题库筛选

use crate::models::content::ChapterQuestions;
use crate::models::question::{Difficulty, Question};

/// 按难度筛选，保留所有分组键；`None` 表示不筛选
pub fn filter_by_difficulty(
    questions: &ChapterQuestions,
    difficulty: Option<Difficulty>,
) -> ChapterQuestions {
    match difficulty {
        None => questions.clone(),
        Some(d) => questions
            .iter()
            .map(|(group, items)| {
                let kept = items.iter().filter(|q| q.difficulty() == d).cloned().collect();
                (group.to_string(), kept)
            })
            .collect(),
    }
}

/// 所有分组都为空
pub fn is_empty(questions: &ChapterQuestions) -> bool {
    questions.values().all(|items| items.is_empty())
}

/// 按 id 查找题目
pub fn find_question<'a>(questions: &'a ChapterQuestions, id: &str) -> Option<&'a Question> {
    questions.values().flatten().find(|q| q.id() == id)
}

/// 按分组顺序展开全部题目
pub fn all_questions(questions: &ChapterQuestions) -> impl Iterator<Item = &Question> {
    questions.values().flatten()
}
