/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::engine::SectionTotal;
use crate::models::plan::PaperPlan;
use crate::orchestrator::BuildStats;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 试卷生成 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match &config.content_base_url {
        Some(url) => info!("🌐 内容库: {}", url),
        None => info!("📂 内容库: {}", config.content_root),
    }
    info!("📁 输出目录: {}", config.output_dir);
    if config.dry_run {
        info!("💡 DRY_RUN 模式：只生成 HTML，不导出 PDF");
    }
    info!("{}", "=".repeat(60));
}

/// 记录组卷计划加载信息
pub fn log_plans_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的组卷计划\n", total);
}

/// 记录单个计划开始处理
///
/// # 参数
/// - `paper_index`: 计划编号（从 1 开始）
/// - `total`: 计划总数
/// - `plan`: 组卷计划
pub fn log_plan_start(paper_index: usize, total: usize, plan: &PaperPlan) {
    info!("\n{}", "=".repeat(60));
    info!(
        "[试卷 {}] 📦 开始处理 {}/{}: {}/{}",
        paper_index, paper_index, total, plan.class_id, plan.subject_id
    );
    if let Some(path) = &plan.file_path {
        info!("[试卷 {}] 📄 计划文件: {}", paper_index, path);
    }
    info!(
        "[试卷 {}] 选题章节 {} 个, 自定义题目 {} 道",
        paper_index,
        plan.picks.len(),
        plan.custom.len()
    );
    info!("{}", "=".repeat(60));
}

/// 记录各分区的题量与得分
pub fn log_section_breakdown(paper_index: usize, sections: &[SectionTotal], total_marks: i64) {
    info!("{}", "─".repeat(60));
    for s in sections {
        match &s.rule {
            Some(rule) => info!(
                "[试卷 {}] {:<12} {} 题, 任选 {} 题, 计分 {}",
                paper_index, s.section.as_str(), s.count, rule.attempt, s.total
            ),
            None => info!(
                "[试卷 {}] {:<12} {} 题, 计分 {}",
                paper_index, s.section.as_str(), s.count, s.total
            ),
        }
    }
    info!("[试卷 {}] 🧮 总分: {}", paper_index, total_marks);
    info!("{}", "─".repeat(60));
}

/// 记录单个计划完成信息
pub fn log_plan_complete(paper_index: usize, stats: &BuildStats) {
    info!(
        "[试卷 {}] ✓ 组卷完成: 题库 {} 道, 自定义 {} 道, 跳过 {} 项",
        paper_index, stats.added, stats.custom, stats.skipped
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `output_dir`: 输出目录
pub fn print_final_stats(success: usize, failed: usize, total: usize, output_dir: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n文件已保存至: {}", output_dir);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
