//! 内容层
//!
//! - `source` - 数据源接口与路径约定
//! - `fs_source` / `http_source` - 本地目录与 HTTP 两种实现
//! - `catalog` - 边界：失败转换为 `Loaded::Unavailable`
//! - `bank` - 题库筛选与查找

pub mod bank;
pub mod catalog;
pub mod fs_source;
pub mod http_source;
pub mod source;

pub use catalog::{Catalog, Loaded, NumberedPage};
pub use fs_source::FsContentSource;
pub use http_source::HttpContentSource;
pub use source::ContentSource;

use crate::config::Config;
use crate::error::ContentError;
use serde::de::DeserializeOwned;

/// 运行时选择的数据源
#[derive(Debug, Clone)]
pub enum ContentStore {
    Fs(FsContentSource),
    Http(HttpContentSource),
}

impl ContentStore {
    /// 配置了 HTTP 地址时使用 HTTP，否则使用本地目录
    pub fn from_config(config: &Config) -> Self {
        match &config.content_base_url {
            Some(url) => ContentStore::Http(HttpContentSource::new(url.clone())),
            None => ContentStore::Fs(FsContentSource::new(config.content_root.clone())),
        }
    }
}

impl ContentSource for ContentStore {
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ContentError> {
        match self {
            ContentStore::Fs(source) => source.fetch_json(path).await,
            ContentStore::Http(source) => source.fetch_json(path).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ContentStore::Fs(source) => source.describe(),
            ContentStore::Http(source) => source.describe(),
        }
    }
}
