use crate::error::ConfigError;
use crate::models::layout::Template;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 静态内容库根目录
    pub content_root: String,
    /// 内容库 HTTP 地址（设置后优先于本地目录）
    pub content_base_url: Option<String>,
    /// 组卷计划所在目录
    pub plan_folder: String,
    /// 单个组卷计划（设置后只处理该文件）
    pub plan_path: Option<String>,
    /// PDF 输出目录
    pub output_dir: String,
    /// 计划未指定模板时使用的模板
    pub default_template: Template,
    /// Chromium / Edge 可执行文件路径，不设置时自动查找
    pub chrome_executable: Option<String>,
    /// 只生成 HTML，不启动浏览器导出
    pub dry_run: bool,
    /// 导出 PDF 的同时保留 HTML
    pub keep_html: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: "public/data".to_string(),
            content_base_url: None,
            plan_folder: "plans".to_string(),
            plan_path: None,
            output_dir: "output_pdf".to_string(),
            default_template: Template::Default,
            chrome_executable: None,
            dry_run: false,
            keep_html: false,
            verbose_logging: false,
        }
    }
}

/// 读取可选的环境变量，空字符串视为未设置
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(
    name: &str,
    expected_type: &str,
    default: T,
) -> Result<T, ConfigError> {
    match env_opt(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            content_root: env_opt("CONTENT_ROOT").unwrap_or(default.content_root),
            content_base_url: env_opt("CONTENT_BASE_URL").or(default.content_base_url),
            plan_folder: env_opt("PLAN_FOLDER").unwrap_or(default.plan_folder),
            plan_path: env_opt("PAPER_PLAN").or(default.plan_path),
            output_dir: env_opt("OUTPUT_DIR").unwrap_or(default.output_dir),
            default_template: env_parse("TEMPLATE", "Template", default.default_template)?,
            chrome_executable: env_opt("CHROME_EXECUTABLE").or(default.chrome_executable),
            dry_run: env_parse("DRY_RUN", "bool", default.dry_run)?,
            keep_html: env_parse("KEEP_HTML", "bool", default.keep_html)?,
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool", default.verbose_logging)?,
        })
    }
}
