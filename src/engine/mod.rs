//! 组卷引擎
//!
//! - `action` - 组卷操作枚举
//! - `reducer` - 纯状态转移与题型分类
//! - `totals` - 总分计算（含选做规则）
//! - `builder` - 单次组卷会话，独占一份状态

pub mod action;
pub mod builder;
pub mod reducer;
pub mod totals;

pub use action::PaperAction;
pub use builder::PaperBuilder;
pub use reducer::{classify, reduce};
pub use totals::{section_totals, total_marks, SectionTotal};
