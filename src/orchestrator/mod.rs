//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载组卷计划（单个文件或整个目录）
//! - 输出全局统计信息
//!
//! ### `paper_processor` - 单个计划处理器
//! - 按计划组卷（content → engine）
//! - 渲染并导出（render → export）
//! - 输出单个计划的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PaperPlan>)
//!     ↓
//! paper_processor (处理单个 PaperPlan)
//!     ↓
//! content / engine / render / export
//! ```

pub mod batch_processor;
pub mod paper_processor;

// 重新导出主要类型
pub use batch_processor::{PaperApp, ProcessingStats};
pub use paper_processor::{build_paper, process_plan, BuildStats, PlanOutcome, RenderOptions};
