//! 组卷计划：描述一张试卷要选哪些题、如何排版

use crate::error::PlanError;
use crate::models::layout::{SpacingPatch, Template};
use crate::models::paper::SettingsPatch;
use crate::models::question::{CustomQuestion, Difficulty, QuestionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 从某个章节选题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterPick {
    pub chapter: String,
    /// 为空时选取章节内全部题目
    #[serde(default)]
    pub questions: Vec<String>,
    /// 仅在选取全部题目时生效
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// 把课本页面中的一个内容块作为自定义题目加入
///
/// 题型和分值默认按摘录长度推断，可以逐项覆盖。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextbookExtract {
    pub page: u32,
    /// 内容块在页面中的下标（从 0 开始）
    pub block: usize,
    #[serde(default, rename = "type")]
    pub section: Option<QuestionType>,
    #[serde(default)]
    pub marks: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperPlan {
    pub class_id: String,
    pub subject_id: String,
    #[serde(default)]
    pub template: Option<Template>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub settings: SettingsPatch,
    #[serde(default)]
    pub spacing: SpacingPatch,
    #[serde(default)]
    pub picks: Vec<ChapterPick>,
    #[serde(default)]
    pub custom: Vec<CustomQuestion>,
    /// 课本摘录题，TOML 中写作 `[[extract]]`
    #[serde(default, rename = "extract")]
    pub extracts: Vec<TextbookExtract>,
    /// 分值覆盖，键为题库题目 id
    #[serde(default)]
    pub marks: BTreeMap<String, i32>,
    /// 选做规则，键为分区名
    #[serde(default)]
    pub attempt: BTreeMap<String, u32>,
    /// 需要一并导出的课本单元
    #[serde(default)]
    pub textbook_units: Vec<u32>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl PaperPlan {
    /// 解析选做规则的分区名
    pub fn attempt_rules(&self) -> Result<Vec<(QuestionType, u32)>, PlanError> {
        self.attempt
            .iter()
            .map(|(section, attempt)| {
                section
                    .parse::<QuestionType>()
                    .map(|s| (s, *attempt))
                    .map_err(|_| PlanError::UnknownSection {
                        section: section.clone(),
                    })
            })
            .collect()
    }

    /// 导出文件名，未指定时使用试卷标题
    pub fn output_name(&self, paper_title: &str) -> String {
        self.file_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| paper_title.to_string())
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"
class_id = "class-9"
subject_id = "english"
template = "Modern"
textbook_units = [2]

[settings]
paper_title = "Final Term"

[spacing]
after_header = 24

[[picks]]
chapter = "chapter-1"
questions = ["q1", "q2"]

[[picks]]
chapter = "chapter-2"
difficulty = "Hard"

[[custom]]
text = "Translate the passage into Urdu."
type = "translation"
marks = 5

[[extract]]
page = 12
block = 3

[[extract]]
page = 13
block = 0
type = "long"
marks = 6

[marks]
q1 = 3

[attempt]
short = 3
"#;

    #[test]
    fn test_parse_plan() {
        let plan: PaperPlan = toml::from_str(PLAN).unwrap();
        assert_eq!(plan.template, Some(Template::Modern));
        assert_eq!(plan.textbook_units, vec![2]);
        assert_eq!(plan.settings.paper_title.as_deref(), Some("Final Term"));
        assert!(plan.settings.school_name.is_none());
        assert_eq!(plan.spacing.after_header, Some(24));
        assert_eq!(plan.picks.len(), 2);
        assert!(plan.picks[1].questions.is_empty());
        assert_eq!(plan.picks[1].difficulty, Some(Difficulty::Hard));
        assert_eq!(plan.custom[0].section, QuestionType::Translation);
        assert!(plan.custom[0].options.is_empty());
        assert_eq!(plan.extracts.len(), 2);
        assert_eq!((plan.extracts[0].page, plan.extracts[0].block), (12, 3));
        assert!(plan.extracts[0].section.is_none());
        assert_eq!(plan.extracts[1].section, Some(QuestionType::Long));
        assert_eq!(plan.extracts[1].marks, Some(6));
        assert_eq!(plan.marks.get("q1"), Some(&3));
        assert_eq!(
            plan.attempt_rules().unwrap(),
            vec![(QuestionType::Short, 3)]
        );
    }

    #[test]
    fn test_minimal_plan_defaults() {
        let plan: PaperPlan = toml::from_str("class_id = \"c\"\nsubject_id = \"s\"\n").unwrap();
        assert!(plan.template.is_none());
        assert!(plan.picks.is_empty());
        assert!(plan.textbook_units.is_empty());
        assert!(plan.extracts.is_empty());
        assert_eq!(plan.output_name("Mid-Term Examination"), "Mid-Term Examination");
    }

    #[test]
    fn test_unknown_attempt_section_rejected() {
        let plan: PaperPlan =
            toml::from_str("class_id = \"c\"\nsubject_id = \"s\"\n[attempt]\nessay = 2\n").unwrap();
        assert!(matches!(
            plan.attempt_rules(),
            Err(PlanError::UnknownSection { .. })
        ));
    }
}
