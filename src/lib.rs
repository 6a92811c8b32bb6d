//! # Paper Builder
//!
//! 从题库和课本内容组卷，并导出为 A4 PDF 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - 题目、试卷状态、内容库数据、排版选项、组卷计划
//!
//! ### ② 组卷引擎（Engine）
//! - `engine/` - 纯函数状态机 `reduce(state, action)`，以及总分计算
//! - `PaperBuilder` - 持有 `PaperState` 的单一所有者
//!
//! ### ③ 内容层（Content）
//! - `content/` - 本地目录 / HTTP 两种数据源
//! - `Catalog` - 把加载失败转换为 `Loaded::Unavailable`，不向上传播
//!
//! ### ④ 展示与导出（Render / Export）
//! - `render/` - 三种试卷模板和课本页面的 HTML
//! - `browser/` + `export/` - 无头浏览器打印 A4 PDF
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/` - 计划 → 内容 → 组卷 → 渲染 → 导出
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use content::{Catalog, ContentSource, ContentStore, Loaded};
pub use engine::{reduce, total_marks, PaperAction, PaperBuilder};
pub use error::{AppError, AppResult};
pub use export::PdfExporter;
pub use models::{PaperPlan, PaperState, Question, QuestionType};
pub use orchestrator::{BuildStats, PaperApp};
pub use render::render_paper;
