use crate::content::source::ContentSource;
use crate::error::ContentError;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 本地目录形式的内容库
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsContentSource {
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ContentError> {
        let full_path = self.root.join(path);
        let location = full_path.display().to_string();
        debug!("读取内容文件: {}", location);

        let content = match fs::read_to_string(&full_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ContentError::ReadFailed { location, source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ContentError::JsonParseFailed { location, source })
    }

    fn describe(&self) -> String {
        format!("本地目录 {}", self.root.display())
    }
}
