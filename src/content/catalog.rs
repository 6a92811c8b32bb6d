//! 内容边界
//!
//! 数据源的任何失败都在这里转换成 `Loaded::Unavailable`，不会向上传播。
//! "不存在" 降级为空结果（课本目录例外：没有课本是合法的，返回 `Ready(None)`）。

use crate::content::source::ContentSource;
use crate::error::ContentError;
use crate::models::content::{
    AppClass, AppSubject, Chapter, ChapterQuestions, TextbookManifest, TextbookPage, TextbookUnit,
};
use tracing::{info, warn};

/// 加载结果
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> Loaded<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Loaded::Ready(v) => Some(v),
            Loaded::Unavailable { .. } => None,
        }
    }
}

/// 带页码的课本页面
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedPage {
    pub number: u32,
    pub page: TextbookPage,
}

pub struct Catalog<S> {
    source: S,
}

fn settle<T>(what: &str, result: Result<Option<T>, ContentError>, fallback: T) -> Loaded<T> {
    match result {
        Ok(Some(v)) => Loaded::Ready(v),
        Ok(None) => {
            info!("{} 不存在，按空结果处理", what);
            Loaded::Ready(fallback)
        }
        Err(e) => {
            warn!("⚠️ 无法加载{}: {}", what, e);
            Loaded::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

impl<S: ContentSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn classes(&self) -> Loaded<Vec<AppClass>> {
        settle("年级列表", self.source.classes().await, Vec::new())
    }

    pub async fn subjects(&self, class_id: &str) -> Loaded<Vec<AppSubject>> {
        let what = format!("科目列表 ({})", class_id);
        settle(&what, self.source.subjects(class_id).await, Vec::new())
    }

    pub async fn chapters(&self, class_id: &str, subject_id: &str) -> Loaded<Vec<Chapter>> {
        let what = format!("章节列表 ({}/{})", class_id, subject_id);
        settle(
            &what,
            self.source.chapters(class_id, subject_id).await,
            Vec::new(),
        )
    }

    pub async fn chapter_questions(
        &self,
        class_id: &str,
        subject_id: &str,
        chapter_id: &str,
    ) -> Loaded<ChapterQuestions> {
        let what = format!("章节题库 ({}/{}/{})", class_id, subject_id, chapter_id);
        settle(
            &what,
            self.source
                .chapter_questions(class_id, subject_id, chapter_id)
                .await,
            ChapterQuestions::new(),
        )
    }

    pub async fn textbook_manifest(
        &self,
        class_id: &str,
        subject_id: &str,
    ) -> Loaded<Option<TextbookManifest>> {
        match self.source.textbook_manifest(class_id, subject_id).await {
            Ok(manifest) => Loaded::Ready(manifest),
            Err(e) => {
                warn!("⚠️ 无法加载课本目录 ({}/{}): {}", class_id, subject_id, e);
                Loaded::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub async fn textbook_page(
        &self,
        class_id: &str,
        subject_id: &str,
        page: u32,
    ) -> Loaded<TextbookPage> {
        let what = format!("课本第 {} 页 ({}/{})", page, class_id, subject_id);
        settle(
            &what,
            self.source.textbook_page(class_id, subject_id, page).await,
            TextbookPage::default(),
        )
    }

    /// 按顺序加载一个单元的全部页面，任意一页失败则整个单元不可用
    pub async fn unit_pages(
        &self,
        class_id: &str,
        subject_id: &str,
        unit: &TextbookUnit,
    ) -> Loaded<Vec<NumberedPage>> {
        let mut pages = Vec::new();
        for number in unit.pages() {
            match self.textbook_page(class_id, subject_id, number).await {
                Loaded::Ready(page) => pages.push(NumberedPage { number, page }),
                Loaded::Unavailable { reason } => {
                    return Loaded::Unavailable {
                        reason: format!("单元 {} 第 {} 页: {}", unit.unit, number, reason),
                    }
                }
            }
        }
        Loaded::Ready(pages)
    }
}
