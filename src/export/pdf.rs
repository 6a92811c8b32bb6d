//! HTML 快照导出为 A4 PDF

use std::path::{Path, PathBuf};

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use tracing::{debug, info};

use crate::browser::{launch_headless_browser, BrowserOptions};
use crate::error::ExportError;

/// A4 纸张尺寸（英寸）
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

const FALLBACK_FILE_NAME: &str = "exam-paper";

/// 去掉路径分隔符和文件系统保留字符，结果为空时使用 `exam-paper`
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') && !c.is_control())
        .collect();
    let cleaned = cleaned.trim().trim_matches('.').trim();
    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

fn print_params() -> PrintToPdfParams {
    PrintToPdfParams {
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        ..Default::default()
    }
}

/// PDF 导出器
///
/// 每次导出启动一个新的无头浏览器，只读取传入的 HTML。
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
    browser: BrowserOptions,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>, browser: BrowserOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            browser,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/<清理后的文件名>.<extension>`
    pub fn target_path(&self, file_name: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", sanitize_file_name(file_name), extension))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
        let write_failed = |source| ExportError::WriteFailed {
            path: path.display().to_string(),
            source,
        };
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(write_failed)?;
        tokio::fs::write(path, bytes).await.map_err(write_failed)
    }

    /// 保存 HTML 快照
    pub async fn write_html(&self, html: &str, file_name: &str) -> Result<PathBuf, ExportError> {
        let path = self.target_path(file_name, "html");
        self.write(&path, html.as_bytes()).await?;
        debug!("HTML 已保存: {}", path.display());
        Ok(path)
    }

    /// 导出 PDF
    pub async fn export(&self, html: &str, file_name: &str) -> Result<PathBuf, ExportError> {
        if html.trim().is_empty() {
            return Err(ExportError::NothingToExport);
        }
        let path = self.target_path(file_name, "pdf");
        info!("📄 正在生成 PDF: {}", path.display());

        let headless = launch_headless_browser(&self.browser).await?;
        let printed = Self::print(&headless.browser, html).await;
        headless.close().await;
        let bytes = printed?;

        self.write(&path, &bytes).await?;
        info!("✅ PDF 已保存: {} ({} 字节)", path.display(), bytes.len());
        Ok(path)
    }

    async fn print(browser: &chromiumoxide::Browser, html: &str) -> Result<Vec<u8>, ExportError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ExportError::browser("new_page", e))?;
        page.set_content(html)
            .await
            .map_err(|e| ExportError::browser("set_content", e))?;
        let bytes = page
            .pdf(print_params())
            .await
            .map_err(|e| ExportError::browser("print_to_pdf", e))?;
        let _ = page.close().await;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Mid-Term Examination"), "Mid-Term Examination");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_file_name("Class 9: Physics?"), "Class 9 Physics");
        assert_eq!(sanitize_file_name("  "), "exam-paper");
        assert_eq!(sanitize_file_name("<>|"), "exam-paper");
    }

    #[test]
    fn test_target_path() {
        let exporter = PdfExporter::new("out", BrowserOptions::default());
        assert_eq!(
            exporter.target_path("Final/Term", "pdf"),
            PathBuf::from("out").join("FinalTerm.pdf")
        );
    }

    #[test]
    fn test_print_params_are_a4_without_margins() {
        let params = print_params();
        assert_eq!(params.paper_width, Some(8.27));
        assert_eq!(params.paper_height, Some(11.69));
        assert_eq!(params.margin_left, Some(0.0));
        assert_eq!(params.print_background, Some(true));
        assert_eq!(params.prefer_css_page_size, Some(true));
    }

    #[tokio::test]
    async fn test_empty_html_is_rejected() {
        let exporter = PdfExporter::new(std::env::temp_dir(), BrowserOptions::default());
        assert!(matches!(
            exporter.export("  ", "x").await,
            Err(ExportError::NothingToExport)
        ));
    }
}
