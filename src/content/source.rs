//! 内容数据源接口
//!
//! 内容库是一棵静态 JSON 文件树：
//!
//! ```text
//! manifest.json                              年级列表
//! {class}/manifest.json                      科目列表
//! {class}/{subject}/manifest.json            章节列表
//! {class}/{subject}/{chapter}.json           章节题库
//! {class}/{subject}/textbook/manifest.json   课本目录
//! {class}/{subject}/textbook/page{n}.json    课本页面
//! ```

use crate::error::ContentError;
use crate::models::content::{
    AppClass, AppSubject, Chapter, ChapterQuestions, TextbookManifest, TextbookPage,
};
use serde::de::DeserializeOwned;

pub mod paths {
    pub fn classes() -> String {
        "manifest.json".to_string()
    }

    pub fn subjects(class_id: &str) -> String {
        format!("{}/manifest.json", class_id)
    }

    pub fn chapters(class_id: &str, subject_id: &str) -> String {
        format!("{}/{}/manifest.json", class_id, subject_id)
    }

    pub fn chapter_questions(class_id: &str, subject_id: &str, chapter_id: &str) -> String {
        format!("{}/{}/{}.json", class_id, subject_id, chapter_id)
    }

    pub fn textbook_manifest(class_id: &str, subject_id: &str) -> String {
        format!("{}/{}/textbook/manifest.json", class_id, subject_id)
    }

    pub fn textbook_page(class_id: &str, subject_id: &str, page: u32) -> String {
        format!("{}/{}/textbook/page{}.json", class_id, subject_id, page)
    }
}

/// 内容数据源
///
/// 所有方法在资源不存在时返回 `Ok(None)`，其他失败返回 `Err`。
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// 读取并解析一个 JSON 资源
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ContentError>;

    /// 数据源描述（用于日志）
    fn describe(&self) -> String;

    async fn classes(&self) -> Result<Option<Vec<AppClass>>, ContentError> {
        self.fetch_json(&paths::classes()).await
    }

    async fn subjects(&self, class_id: &str) -> Result<Option<Vec<AppSubject>>, ContentError> {
        self.fetch_json(&paths::subjects(class_id)).await
    }

    async fn chapters(
        &self,
        class_id: &str,
        subject_id: &str,
    ) -> Result<Option<Vec<Chapter>>, ContentError> {
        self.fetch_json(&paths::chapters(class_id, subject_id)).await
    }

    async fn chapter_questions(
        &self,
        class_id: &str,
        subject_id: &str,
        chapter_id: &str,
    ) -> Result<Option<ChapterQuestions>, ContentError> {
        self.fetch_json(&paths::chapter_questions(class_id, subject_id, chapter_id))
            .await
    }

    async fn textbook_manifest(
        &self,
        class_id: &str,
        subject_id: &str,
    ) -> Result<Option<TextbookManifest>, ContentError> {
        self.fetch_json(&paths::textbook_manifest(class_id, subject_id))
            .await
    }

    async fn textbook_page(
        &self,
        class_id: &str,
        subject_id: &str,
        page: u32,
    ) -> Result<Option<TextbookPage>, ContentError> {
        self.fetch_json(&paths::textbook_page(class_id, subject_id, page))
            .await
    }
}
