use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 内容库读取错误
    #[error("内容错误: {0}")]
    Content(#[from] ContentError),
    /// PDF 导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 组卷计划错误
    #[error("组卷计划错误: {0}")]
    Plan(#[from] PlanError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 内容库错误
///
/// "文件不存在 / 404" 不算错误，由数据源返回 `Ok(None)`。
#[derive(Debug, Error)]
pub enum ContentError {
    /// 网络请求失败
    #[error("请求失败 ({location}): {source}")]
    RequestFailed {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    /// 返回了非成功状态码
    #[error("请求返回错误状态 ({location}): {status}")]
    BadStatus { location: String, status: u16 },
    /// 读取本地文件失败
    #[error("读取文件失败 ({location}): {source}")]
    ReadFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({location}): {source}")]
    JsonParseFailed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {message}")]
    BrowserConfig { message: String },
    /// 浏览器启动或页面操作失败
    #[error("浏览器操作失败 ({step}): {source}")]
    Browser {
        step: &'static str,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 写入 PDF 文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 没有可导出的页面
    #[error("没有可导出的页面")]
    NothingToExport,
}

/// 组卷计划错误
#[derive(Debug, Error)]
pub enum PlanError {
    /// 选做规则中的分区名无法识别
    #[error("未知分区: {section}")]
    UnknownSection { section: String },
    /// 章节在内容库中不可用
    #[error("章节不可用: {chapter} ({reason})")]
    ChapterUnavailable { chapter: String, reason: String },
    /// 章节中找不到指定题目
    #[error("章节 {chapter} 中找不到题目 {question}")]
    QuestionNotFound { chapter: String, question: String },
    /// 课本页面不可用
    #[error("课本第 {page} 页不可用 ({reason})")]
    PageUnavailable { page: u32, reason: String },
    /// 课本页面中没有该内容块
    #[error("课本第 {page} 页没有第 {block} 个内容块")]
    BlockNotFound { page: u32, block: usize },
    /// 内容块没有可用的文本
    #[error("课本第 {page} 页第 {block} 个内容块没有文本")]
    BlockWithoutText { page: u32, block: usize },
    /// 分值覆盖指向的题目不在试卷中
    #[error("试卷中没有题目 {question}，分值覆盖被忽略")]
    MarksTargetMissing { question: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl ExportError {
    pub fn browser(step: &'static str, source: chromiumoxide::error::CdpError) -> Self {
        ExportError::Browser { step, source }
    }
}

impl ContentError {
    pub fn location(&self) -> &str {
        match self {
            ContentError::RequestFailed { location, .. }
            | ContentError::BadStatus { location, .. }
            | ContentError::ReadFailed { location, .. }
            | ContentError::JsonParseFailed { location, .. } => location,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
