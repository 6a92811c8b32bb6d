//! 排版选项：模板与间距

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 试卷模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Template {
    #[default]
    Default,
    Compact,
    Modern,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Default, Template::Compact, Template::Modern];

    pub fn name(self) -> &'static str {
        match self {
            Template::Default => "Default",
            Template::Compact => "Compact",
            Template::Modern => "Modern",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Template::Default),
            "compact" => Ok(Template::Compact),
            "modern" => Ok(Template::Modern),
            _ => Err(format!("未知模板: {}", s)),
        }
    }
}

/// 试卷间距（单位 px）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingSettings {
    pub after_header: u32,
    pub after_mcqs: u32,
    pub after_short_questions: u32,
    pub after_long_questions: u32,
    pub mcq_item_spacing: u32,
    pub question_item_spacing: u32,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self {
            after_header: 16,
            after_mcqs: 20,
            after_short_questions: 20,
            after_long_questions: 20,
            mcq_item_spacing: 4,
            question_item_spacing: 8,
        }
    }
}

/// 间距的部分覆盖
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingPatch {
    pub after_header: Option<u32>,
    pub after_mcqs: Option<u32>,
    pub after_short_questions: Option<u32>,
    pub after_long_questions: Option<u32>,
    pub mcq_item_spacing: Option<u32>,
    pub question_item_spacing: Option<u32>,
}

impl SpacingSettings {
    pub fn apply(mut self, patch: SpacingPatch) -> Self {
        self.after_header = patch.after_header.unwrap_or(self.after_header);
        self.after_mcqs = patch.after_mcqs.unwrap_or(self.after_mcqs);
        self.after_short_questions = patch
            .after_short_questions
            .unwrap_or(self.after_short_questions);
        self.after_long_questions = patch
            .after_long_questions
            .unwrap_or(self.after_long_questions);
        self.mcq_item_spacing = patch.mcq_item_spacing.unwrap_or(self.mcq_item_spacing);
        self.question_item_spacing = patch
            .question_item_spacing
            .unwrap_or(self.question_item_spacing);
        self
    }

    /// 紧凑模板使用的减半间距
    pub fn halved(&self) -> Self {
        Self {
            after_header: self.after_header / 2,
            after_mcqs: self.after_mcqs / 2,
            after_short_questions: self.after_short_questions / 2,
            after_long_questions: self.after_long_questions / 2,
            mcq_item_spacing: self.mcq_item_spacing / 2,
            question_item_spacing: self.question_item_spacing / 2,
        }
    }
}
