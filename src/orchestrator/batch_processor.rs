//! 批量组卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口：
//!
//! 1. **应用初始化**：输出启动信息，选择内容数据源，创建导出器
//! 2. **计划加载**：单个计划文件，或扫描目录下全部计划
//! 3. **逐个处理**：委托 paper_processor 处理单个计划
//! 4. **全局统计**：汇总所有计划的处理结果
//!
//! 每次导出都会启动独立的浏览器，计划之间按顺序处理。

use crate::browser::BrowserOptions;
use crate::config::Config;
use crate::content::{Catalog, ContentSource, ContentStore};
use crate::export::PdfExporter;
use crate::models::plan::PaperPlan;
use crate::models::{load_all_plans, load_paper_plan};
use crate::orchestrator::paper_processor::{process_plan, RenderOptions};
use crate::utils::logging::{log_plan_start, log_plans_loaded, log_startup, print_final_stats};
use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 应用主结构
pub struct PaperApp {
    config: Config,
    catalog: Catalog<ContentStore>,
    exporter: PdfExporter,
}

impl PaperApp {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let catalog = Catalog::new(ContentStore::from_config(&config));
        info!("📚 数据源: {}", catalog.source().describe());

        let exporter = PdfExporter::new(
            &config.output_dir,
            BrowserOptions {
                chrome_executable: config.chrome_executable.clone(),
            },
        );

        Ok(Self {
            config,
            catalog,
            exporter,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            default_template: self.config.default_template,
            dry_run: self.config.dry_run,
            keep_html: self.config.keep_html,
        }
    }

    /// 运行应用主逻辑
    ///
    /// `plan_path` 为 `None` 时使用配置中的计划文件，仍未设置则处理计划目录。
    pub async fn run(&self, plan_path: Option<&str>) -> Result<ProcessingStats> {
        let plans = self.load_plans(plan_path).await?;

        if plans.is_empty() {
            warn!("⚠️ 没有找到待处理的组卷计划，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_plans_loaded(plans.len());

        let stats = self.process_all_plans(&plans).await;

        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_dir,
        );

        Ok(stats)
    }

    /// 加载组卷计划
    async fn load_plans(&self, plan_path: Option<&str>) -> Result<Vec<PaperPlan>> {
        match plan_path.or(self.config.plan_path.as_deref()) {
            Some(path) => {
                info!("\n📁 正在加载组卷计划: {}", path);
                Ok(vec![load_paper_plan(Path::new(path)).await?])
            }
            None => {
                info!("\n📁 正在扫描组卷计划目录: {}", self.config.plan_folder);
                load_all_plans(&self.config.plan_folder).await
            }
        }
    }

    /// 处理所有计划，单个计划失败不影响其他计划
    async fn process_all_plans(&self, plans: &[PaperPlan]) -> ProcessingStats {
        let mut stats = ProcessingStats {
            total: plans.len(),
            ..Default::default()
        };

        for (idx, plan) in plans.iter().enumerate() {
            let paper_index = idx + 1;
            log_plan_start(paper_index, plans.len(), plan);

            match process_plan(
                &self.catalog,
                &self.exporter,
                plan,
                self.render_options(),
                paper_index,
            )
            .await
            {
                Ok(outcome) => {
                    for file in &outcome.files {
                        info!("[试卷 {}] 📄 {}", paper_index, file.display());
                    }
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[试卷 {}] ❌ 处理过程中发生错误: {:#}", paper_index, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}
