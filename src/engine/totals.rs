//! 总分计算
//!
//! 每次读取都基于完整状态重新计算，不在状态上缓存：分值和选做规则可以各自独立变化。

use crate::models::paper::{group_by_section, AttemptRule, PaperState};
use crate::models::question::QuestionType;
use serde::Serialize;

/// 单个分区的计分明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTotal {
    pub section: QuestionType,
    /// 分区内题目数量
    pub count: usize,
    /// 实际生效的选做规则（无规则或规则无效时为 `None`）
    pub rule: Option<AttemptRule>,
    /// 计入总分的题目数量
    pub counted: usize,
    pub total: i64,
}

/// 计算一个分区的得分
///
/// 规则有效（`0 < attempt <= 题数`）时按分值降序取前 `attempt` 题求和，
/// 否则全部求和。
fn section_score(marks: &mut [i32], rule: Option<&AttemptRule>) -> (usize, i64) {
    match rule.filter(|r| r.applies_to(marks.len())) {
        Some(rule) => {
            marks.sort_unstable_by(|a, b| b.cmp(a));
            let take = rule.attempt as usize;
            (take, marks[..take].iter().map(|m| i64::from(*m)).sum())
        }
        None => (marks.len(), marks.iter().map(|m| i64::from(*m)).sum()),
    }
}

/// 各分区的计分明细，分区按首次出现的顺序排列
pub fn section_totals(state: &PaperState) -> Vec<SectionTotal> {
    group_by_section(&state.questions)
        .into_iter()
        .map(|(section, items)| {
            let mut marks: Vec<i32> = items.iter().map(|q| q.marks).collect();
            let rule = state
                .attempt_rules
                .get(&section)
                .filter(|r| r.applies_to(marks.len()))
                .copied();
            let (counted, total) = section_score(&mut marks, rule.as_ref());
            SectionTotal {
                section,
                count: items.len(),
                rule,
                counted,
                total,
            }
        })
        .collect()
}

/// 试卷总分
pub fn total_marks(state: &PaperState) -> i64 {
    section_totals(state).iter().map(|s| s.total).sum()
}
