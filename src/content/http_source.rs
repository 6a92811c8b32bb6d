use crate::content::source::ContentSource;
use crate::error::ContentError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// 通过 HTTP 访问的内容库（与本地目录结构相同）
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl ContentSource for HttpContentSource {
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ContentError> {
        let location = self.url(path);
        debug!("请求内容: {}", location);

        let response = self
            .client
            .get(&location)
            .send()
            .await
            .map_err(|source| ContentError::RequestFailed {
                location: location.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ContentError::BadStatus {
                location,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ContentError::RequestFailed {
                location: location.clone(),
                source,
            })?;

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|source| ContentError::JsonParseFailed { location, source })
    }

    fn describe(&self) -> String {
        format!("HTTP {}", self.base_url)
    }
}
