//! 静态内容库中的数据结构（年级、科目、章节题库、课本）

use crate::models::question::Question;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppClass {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSubject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
}

/// 章节题库：分组键（如 `mcqs`、`shorts`、`longs`）到题目列表
///
/// 分组保持 JSON 中的顺序，整章加入试卷时按这个顺序加入。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChapterQuestions {
    groups: Vec<(String, Vec<Question>)>,
}

impl ChapterQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加分组，同名分组覆盖原有内容但保留原位置
    pub fn insert(&mut self, group: String, items: Vec<Question>) {
        match self.groups.iter_mut().find(|(g, _)| *g == group) {
            Some((_, existing)) => *existing = items,
            None => self.groups.push((group, items)),
        }
    }

    pub fn get(&self, group: &str) -> Option<&[Question]> {
        self.groups
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Question])> {
        self.groups
            .iter()
            .map(|(g, items)| (g.as_str(), items.as_slice()))
    }

    pub fn values(&self) -> impl Iterator<Item = &[Question]> {
        self.groups.iter().map(|(_, items)| items.as_slice())
    }
}

impl FromIterator<(String, Vec<Question>)> for ChapterQuestions {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Question>)>>(iter: I) -> Self {
        let mut questions = Self::new();
        for (group, items) in iter {
            questions.insert(group, items);
        }
        questions
    }
}

impl Serialize for ChapterQuestions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, items) in &self.groups {
            map.serialize_entry(group, items)?;
        }
        map.end()
    }
}

struct ChapterQuestionsVisitor;

impl<'de> Visitor<'de> for ChapterQuestionsVisitor {
    type Value = ChapterQuestions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("分组名到题目列表的映射")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut questions = ChapterQuestions::new();
        while let Some((group, items)) = access.next_entry::<String, Vec<Question>>()? {
            questions.insert(group, items);
        }
        Ok(questions)
    }
}

impl<'de> Deserialize<'de> for ChapterQuestions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ChapterQuestionsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextbookUnit {
    pub unit: u32,
    pub title: String,
    pub start_page: u32,
    pub end_page: u32,
}

impl TextbookUnit {
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start_page..=self.end_page
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextbookManifest {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub units: Vec<TextbookUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextbookPage {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// 富文本片段，`kind` 为 `bold`、`arabic` 或空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChunk {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// 富文本：片段列表或纯字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Chunks(Vec<TextChunk>),
    Plain(String),
}

impl RichText {
    pub fn plain_text(&self) -> String {
        match self {
            RichText::Plain(s) => s.clone(),
            RichText::Chunks(chunks) => chunks.iter().map(|c| c.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aside {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxList {
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub word: String,
    pub meaning: String,
}

/// 课本页面中的内容块，按 `type` 字段区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    UnitHeader {
        #[serde(default)]
        unit: Value,
        #[serde(default)]
        title: String,
    },
    Heading {
        #[serde(default)]
        level: Option<u8>,
        #[serde(default)]
        text: String,
    },
    Paragraph {
        #[serde(default)]
        content: Option<RichText>,
        #[serde(default)]
        text: Option<String>,
    },
    Quote {
        #[serde(default)]
        content: Option<RichText>,
        #[serde(default)]
        text: Option<String>,
    },
    ParagraphWithAside {
        #[serde(default)]
        content: Option<RichText>,
        #[serde(default)]
        text: Option<String>,
        aside: Aside,
    },
    Image {
        #[serde(default)]
        alt: Option<String>,
    },
    #[serde(rename = "box")]
    Callout {
        #[serde(default)]
        title: Option<String>,
        #[serde(rename = "headerStyle", default)]
        header_style: Option<String>,
        #[serde(default)]
        content: Option<RichText>,
        #[serde(default)]
        list: Option<BoxList>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        items: Vec<String>,
    },
    ArabicQuote {
        #[serde(default)]
        text: String,
        #[serde(default)]
        translation: Option<String>,
    },
    Glossary {
        #[serde(default)]
        title: String,
        #[serde(default)]
        terms: Vec<GlossaryTerm>,
    },
    #[serde(other)]
    Unsupported,
}

impl ContentBlock {
    /// 提取内容块的完整文本，用于"作为自定义题目添加"
    ///
    /// 优先级：字符串形式的 content，其次 text，最后拼接片段列表。
    pub fn full_text(&self) -> String {
        let (content, text) = match self {
            ContentBlock::Paragraph { content, text }
            | ContentBlock::Quote { content, text }
            | ContentBlock::ParagraphWithAside { content, text, .. } => {
                (content.as_ref(), text.as_deref())
            }
            ContentBlock::Callout { content, .. } => (content.as_ref(), None),
            ContentBlock::Heading { text, .. }
            | ContentBlock::ArabicQuote { text, .. }
            | ContentBlock::UnitHeader { title: text, .. }
            | ContentBlock::Glossary { title: text, .. } => (None, Some(text.as_str())),
            ContentBlock::Image { .. } | ContentBlock::List { .. } | ContentBlock::Unsupported => {
                (None, None)
            }
        };

        if let Some(RichText::Plain(s)) = content {
            return s.clone();
        }
        if let Some(t) = text {
            return t.to_string();
        }
        match content {
            Some(rich) => rich.plain_text(),
            None => String::new(),
        }
    }
}

/// 内容库中单值标签（数字或字符串）的显示形式
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_chunks_full_text() {
        let json = r#"{"type":"paragraph","content":[{"type":"bold","text":"Water "},{"text":"boils at 100°C."}]}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.full_text(), "Water boils at 100°C.");
    }

    #[test]
    fn test_string_content_wins_over_text() {
        let block = ContentBlock::Quote {
            content: Some(RichText::Plain("from content".to_string())),
            text: Some("from text".to_string()),
        };
        assert_eq!(block.full_text(), "from content");
    }

    #[test]
    fn test_unknown_block_type_is_unsupported() {
        let json = r#"{"type":"video","src":"x.mp4"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block, ContentBlock::Unsupported);
        assert_eq!(block.full_text(), "");
    }

    #[test]
    fn test_page_without_content_is_empty() {
        let page: TextbookPage = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_box_block_parses_header_style() {
        let json = r#"{"type":"box","title":"Note","headerStyle":"dark","list":{"items":["a","b"]}}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Callout {
                header_style, list, ..
            } => {
                assert_eq!(header_style.as_deref(), Some("dark"));
                assert_eq!(list.unwrap().items.len(), 2);
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn test_chapter_groups_keep_source_order() {
        let json = r#"{
            "mcqs": [{"id":"m1","text":"Pick","marks":1,"difficulty":"Easy","options":["a","b"]}],
            "shorts": [{"id":"s1","text":"Define","marks":2,"difficulty":"Easy"}],
            "longs": [{"id":"l1","text":"Explain","marks":5,"difficulty":"Hard"}]
        }"#;
        let bank: ChapterQuestions = serde_json::from_str(json).unwrap();
        let groups: Vec<&str> = bank.iter().map(|(g, _)| g).collect();
        assert_eq!(groups, vec!["mcqs", "shorts", "longs"]);
        assert_eq!(bank.get("longs").unwrap()[0].id(), "l1");

        let again: ChapterQuestions =
            serde_json::from_str(&serde_json::to_string(&bank).unwrap()).unwrap();
        assert_eq!(again, bank);
    }

    #[test]
    fn test_value_label() {
        assert_eq!(value_label(&serde_json::json!(3)), "3");
        assert_eq!(value_label(&serde_json::json!("IV")), "IV");
    }
}
