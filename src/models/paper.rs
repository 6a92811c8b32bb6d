use crate::models::question::{Question, QuestionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 放入试卷中的题目
///
/// `paper_id` 在试卷内唯一，与题目自身的 id 无关（同一道题可以加入多次）。
/// `marks` 可以被用户覆盖，`original_question` 永远不会被修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperQuestion {
    pub paper_id: String,
    pub original_question: Question,
    pub section: QuestionType,
    pub marks: i32,
}

/// 试卷抬头信息，不做任何校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSettings {
    pub school_name: String,
    pub paper_title: String,
    pub teacher_name: String,
    pub date: String,
    pub duration: String,
}

impl Default for PaperSettings {
    fn default() -> Self {
        Self {
            school_name: "Your School Name".to_string(),
            paper_title: "Mid-Term Examination".to_string(),
            teacher_name: "Teacher Name".to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            duration: "3 Hours".to_string(),
        }
    }
}

/// 抬头信息的部分更新，`None` 字段保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub school_name: Option<String>,
    pub paper_title: Option<String>,
    pub teacher_name: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.school_name.is_none()
            && self.paper_title.is_none()
            && self.teacher_name.is_none()
            && self.date.is_none()
            && self.duration.is_none()
    }
}

impl PaperSettings {
    /// 浅合并
    pub fn merged(mut self, patch: SettingsPatch) -> Self {
        if let Some(v) = patch.school_name {
            self.school_name = v;
        }
        if let Some(v) = patch.paper_title {
            self.paper_title = v;
        }
        if let Some(v) = patch.teacher_name {
            self.teacher_name = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.duration {
            self.duration = v;
        }
        self
    }
}

/// 选做规则："共 total 题，任选 attempt 题"
///
/// `total` 是规则最后一次设置时该分区的题目数量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRule {
    pub total: usize,
    pub attempt: u32,
}

impl AttemptRule {
    /// 规则对当前分区大小是否有效（`0 < attempt <= count`）
    pub fn applies_to(&self, count: usize) -> bool {
        self.attempt > 0 && (self.attempt as usize) <= count
    }
}

pub type AttemptRules = BTreeMap<QuestionType, AttemptRule>;

/// 组卷状态（聚合根）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaperState {
    pub questions: Vec<PaperQuestion>,
    pub settings: PaperSettings,
    pub attempt_rules: AttemptRules,
}

impl PaperState {
    pub fn find(&self, paper_id: &str) -> Option<&PaperQuestion> {
        self.questions.iter().find(|q| q.paper_id == paper_id)
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 某个分区当前的题目数量
    pub fn section_count(&self, section: QuestionType) -> usize {
        self.questions.iter().filter(|q| q.section == section).count()
    }
}

/// 按分区分组，分区按首次出现的顺序排列，分区内保持插入顺序
pub fn group_by_section(questions: &[PaperQuestion]) -> Vec<(QuestionType, Vec<&PaperQuestion>)> {
    let mut groups: Vec<(QuestionType, Vec<&PaperQuestion>)> = Vec::new();
    for q in questions {
        match groups.iter_mut().find(|(section, _)| *section == q.section) {
            Some((_, items)) => items.push(q),
            None => groups.push((q.section, vec![q])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Difficulty, QuestionBase};

    fn pq(paper_id: &str, section: QuestionType) -> PaperQuestion {
        PaperQuestion {
            paper_id: paper_id.to_string(),
            original_question: Question::Plain(QuestionBase {
                id: paper_id.to_string(),
                text: String::new(),
                marks: 1,
                page: 0,
                difficulty: Difficulty::Easy,
            }),
            section,
            marks: 1,
        }
    }

    #[test]
    fn test_group_by_section_keeps_encounter_order() {
        let questions = vec![
            pq("a", QuestionType::Short),
            pq("b", QuestionType::Mcq),
            pq("c", QuestionType::Short),
            pq("d", QuestionType::Long),
        ];
        let groups = group_by_section(&questions);
        let sections: Vec<_> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sections,
            vec![QuestionType::Short, QuestionType::Mcq, QuestionType::Long]
        );
        let short_ids: Vec<_> = groups[0].1.iter().map(|q| q.paper_id.as_str()).collect();
        assert_eq!(short_ids, vec!["a", "c"]);
    }

    #[test]
    fn test_settings_merge_is_shallow() {
        let settings = PaperSettings::default();
        let date = settings.date.clone();
        let merged = settings.merged(SettingsPatch {
            paper_title: Some("Final Term".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.paper_title, "Final Term");
        assert_eq!(merged.school_name, "Your School Name");
        assert_eq!(merged.date, date);
    }

    #[test]
    fn test_default_date_format() {
        let date = PaperSettings::default().date;
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_attempt_rules_serialize_with_section_keys() {
        let mut rules = AttemptRules::new();
        rules.insert(QuestionType::Short, AttemptRule { total: 5, attempt: 3 });
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json["short"]["total"], 5);
        assert_eq!(json["short"]["attempt"], 3);
    }
}
