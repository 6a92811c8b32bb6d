use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::error::ExportError;

/// 无头浏览器启动参数
#[derive(Debug, Clone, Default)]
pub struct BrowserOptions {
    /// Chromium / Edge 可执行文件，`None` 时由 chromiumoxide 自动查找
    pub chrome_executable: Option<String>,
}

/// 已启动的浏览器及其事件处理任务
pub struct HeadlessBrowser {
    pub browser: Browser,
    handler: JoinHandle<()>,
}

impl HeadlessBrowser {
    /// 关闭浏览器并结束事件处理任务
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
        debug!("浏览器已关闭");
    }
}

/// 启动无头浏览器
pub async fn launch_headless_browser(options: &BrowserOptions) -> Result<HeadlessBrowser, ExportError> {
    info!("🚀 启动无头浏览器...");

    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",           // 无头模式禁用 GPU
        "--no-sandbox",            // 容器内没有沙盒权限
        "--disable-dev-shm-usage", // 防止共享内存不足
    ]);
    if let Some(executable) = &options.chrome_executable {
        debug!("浏览器路径: {}", executable);
        builder = builder.chrome_executable(Path::new(executable));
    }
    let config = builder.build().map_err(|message| {
        error!("配置无头浏览器失败: {}", message);
        ExportError::BrowserConfig { message }
    })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        ExportError::browser("launch", e)
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    let handler = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    Ok(HeadlessBrowser { browser, handler })
}
