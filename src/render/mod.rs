//! 试卷与课本的 HTML 渲染
//!
//! 渲染结果是完整的 HTML 文档，交给浏览器打印成 A4 PDF。
//! 分区固定按 mcq、short、long、translation、custom 排列，空分区不输出，
//! 编号在输出的分区之间连续。

pub mod html;
pub mod sections;
pub mod templates;
pub mod textbook;

pub use html::escape;
pub use textbook::render_textbook;

use crate::models::layout::{SpacingSettings, Template};
use crate::models::paper::PaperState;

/// 渲染试卷
pub fn render_paper(paper: &PaperState, spacing: &SpacingSettings, template: Template) -> String {
    let (css, body) = match template {
        Template::Default => (templates::default::CSS, templates::default::render(paper, spacing)),
        Template::Compact => (templates::compact::CSS, templates::compact::render(paper, spacing)),
        Template::Modern => (templates::modern::CSS, templates::modern::render(paper, spacing)),
    };
    html::document(&paper.settings.paper_title, css, &body)
}
