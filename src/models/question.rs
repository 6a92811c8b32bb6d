use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 难度等级（只作为来源元数据，不参与组卷计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题型（试卷中的分区）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Short,
    Long,
    Translation,
    Custom,
}

impl QuestionType {
    /// 试卷上的固定排版顺序
    pub const ALL: [QuestionType; 5] = [
        QuestionType::Mcq,
        QuestionType::Short,
        QuestionType::Long,
        QuestionType::Translation,
        QuestionType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Short => "short",
            QuestionType::Long => "long",
            QuestionType::Translation => "translation",
            QuestionType::Custom => "custom",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的题型字符串
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知题型: {0}")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mcq" => Ok(QuestionType::Mcq),
            "short" => Ok(QuestionType::Short),
            "long" => Ok(QuestionType::Long),
            "translation" => Ok(QuestionType::Translation),
            "custom" => Ok(QuestionType::Custom),
            _ => Err(UnknownQuestionType(s.to_string())),
        }
    }
}

/// 所有题目共有的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBase {
    pub id: String,
    pub text: String,
    pub marks: i32,
    #[serde(default)]
    pub page: u32,
    pub difficulty: Difficulty,
}

/// 选择题：带选项与答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
}

/// 题库或自定义题目
///
/// JSON 中带 `options` 字段的对象解析为 `Mcq`，其余为 `Plain`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Question {
    Mcq(McqQuestion),
    Plain(QuestionBase),
}

impl Question {
    pub fn base(&self) -> &QuestionBase {
        match self {
            Question::Mcq(q) => &q.base,
            Question::Plain(base) => base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn text(&self) -> &str {
        &self.base().text
    }

    pub fn marks(&self) -> i32 {
        self.base().marks
    }

    pub fn difficulty(&self) -> Difficulty {
        self.base().difficulty
    }

    /// 选择题的选项，非选择题返回 `None`
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::Mcq(q) => Some(&q.options),
            Question::Plain(_) => None,
        }
    }
}

/// 自定义题目的输入
///
/// 与题库题目不同，自定义题目的分区由作者直接指定，不走自动分类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestion {
    pub text: String,
    #[serde(rename = "type")]
    pub section: QuestionType,
    pub marks: i32,
    #[serde(default)]
    pub options: Vec<String>,
}

/// 超过该长度的摘录默认按大题处理
const LONG_EXTRACT_CHARS: usize = 150;

impl CustomQuestion {
    /// 根据课本摘录猜测题型和分值
    ///
    /// 空白文本返回 `None`。
    pub fn suggest(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let (section, marks) = if text.chars().count() > LONG_EXTRACT_CHARS {
            (QuestionType::Long, 5)
        } else {
            (QuestionType::Short, 2)
        };
        Some(Self {
            text: text.to_string(),
            section,
            marks,
            options: Vec::new(),
        })
    }
}
