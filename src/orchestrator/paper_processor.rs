//! 单个组卷计划处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **组卷**：按 选题 → 自定义题目 → 课本摘录 → 分值覆盖 → 选做规则 的顺序构建试卷
//! 2. **渲染**：按计划的模板和间距生成 HTML
//! 3. **导出**：导出试卷 PDF 以及计划中要求的课本单元
//! 4. **统计输出**：记录加入、跳过的题目数量
//!
//! 选做规则放在最后设置，规则记录的题目总数才等于最终分区大小。

use crate::content::{bank, Catalog, ContentSource, Loaded};
use crate::engine::PaperBuilder;
use crate::error::PlanError;
use crate::export::PdfExporter;
use crate::models::layout::{SpacingSettings, Template};
use crate::models::plan::{ChapterPick, PaperPlan, TextbookExtract};
use crate::models::question::{CustomQuestion, QuestionType};
use crate::render::{render_paper, render_textbook};
use crate::utils::logging::{log_plan_complete, log_section_breakdown, truncate_text};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 组卷统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    /// 从题库加入的题目
    pub added: usize,
    /// 自定义题目（含课本摘录）
    pub custom: usize,
    /// 被跳过的题目或覆盖项
    pub skipped: usize,
}

/// 单个计划的处理选项
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub default_template: Template,
    pub dry_run: bool,
    pub keep_html: bool,
}

/// 单个计划的处理结果
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub stats: BuildStats,
    pub total_marks: i64,
    /// 写出的文件（PDF 或 HTML）
    pub files: Vec<PathBuf>,
}

async fn apply_pick<S: ContentSource>(
    catalog: &Catalog<S>,
    plan: &PaperPlan,
    pick: &ChapterPick,
    builder: &mut PaperBuilder,
    stats: &mut BuildStats,
    paper_index: usize,
) {
    let bank = match catalog
        .chapter_questions(&plan.class_id, &plan.subject_id, &pick.chapter)
        .await
    {
        Loaded::Ready(bank) => bank,
        Loaded::Unavailable { reason } => {
            let e = PlanError::ChapterUnavailable {
                chapter: pick.chapter.clone(),
                reason,
            };
            warn!("[试卷 {}] ⚠️ {}", paper_index, e);
            stats.skipped += pick.questions.len().max(1);
            return;
        }
    };

    if pick.questions.is_empty() {
        let filtered = bank::filter_by_difficulty(&bank, pick.difficulty);
        if bank::is_empty(&filtered) {
            warn!(
                "[试卷 {}] ⚠️ 章节 {} 中没有可用的题目",
                paper_index, pick.chapter
            );
            return;
        }
        for question in bank::all_questions(&filtered) {
            debug!(
                "[试卷 {}] + {} {}",
                paper_index,
                question.id(),
                truncate_text(question.text(), 40)
            );
            builder.add_question(question.clone());
            stats.added += 1;
        }
        return;
    }

    for id in &pick.questions {
        match bank::find_question(&bank, id) {
            Some(question) => {
                debug!(
                    "[试卷 {}] + {} {}",
                    paper_index,
                    id,
                    truncate_text(question.text(), 40)
                );
                builder.add_question(question.clone());
                stats.added += 1;
            }
            None => {
                let e = PlanError::QuestionNotFound {
                    chapter: pick.chapter.clone(),
                    question: id.clone(),
                };
                warn!("[试卷 {}] ⚠️ {}", paper_index, e);
                stats.skipped += 1;
            }
        }
    }
}

/// 课本摘录转换成自定义题目
async fn resolve_extract<S: ContentSource>(
    catalog: &Catalog<S>,
    plan: &PaperPlan,
    extract: &TextbookExtract,
) -> Result<CustomQuestion, PlanError> {
    let page = match catalog
        .textbook_page(&plan.class_id, &plan.subject_id, extract.page)
        .await
    {
        Loaded::Ready(page) => page,
        Loaded::Unavailable { reason } => {
            return Err(PlanError::PageUnavailable {
                page: extract.page,
                reason,
            })
        }
    };
    let block = page
        .content
        .get(extract.block)
        .ok_or(PlanError::BlockNotFound {
            page: extract.page,
            block: extract.block,
        })?;
    let mut custom =
        CustomQuestion::suggest(&block.full_text()).ok_or(PlanError::BlockWithoutText {
            page: extract.page,
            block: extract.block,
        })?;
    if let Some(section) = extract.section {
        custom.section = section;
    }
    if let Some(marks) = extract.marks {
        custom.marks = marks;
    }
    Ok(custom)
}

/// 按计划构建试卷
///
/// 内容不可用、题目不存在、分值覆盖找不到目标都只记录警告并计入 `skipped`。
pub async fn build_paper<S: ContentSource>(
    catalog: &Catalog<S>,
    plan: &PaperPlan,
    attempt_rules: &[(QuestionType, u32)],
    paper_index: usize,
) -> (PaperBuilder, BuildStats) {
    let mut builder = PaperBuilder::new();
    let mut stats = BuildStats::default();

    if !plan.settings.is_empty() {
        builder.update_settings(plan.settings.clone());
    }

    for pick in &plan.picks {
        apply_pick(catalog, plan, pick, &mut builder, &mut stats, paper_index).await;
    }

    for custom in &plan.custom {
        builder.add_custom_question(custom.clone());
        stats.custom += 1;
    }

    for extract in &plan.extracts {
        match resolve_extract(catalog, plan, extract).await {
            Ok(custom) => {
                debug!(
                    "[试卷 {}] + 摘录 {} {}",
                    paper_index,
                    custom.section,
                    truncate_text(&custom.text, 40)
                );
                builder.add_custom_question(custom);
                stats.custom += 1;
            }
            Err(e) => {
                warn!("[试卷 {}] ⚠️ {}", paper_index, e);
                stats.skipped += 1;
            }
        }
    }

    for (question_id, marks) in &plan.marks {
        let targets: Vec<String> = builder
            .paper()
            .questions
            .iter()
            .filter(|q| q.original_question.id() == question_id.as_str())
            .map(|q| q.paper_id.clone())
            .collect();
        if targets.is_empty() {
            let e = PlanError::MarksTargetMissing {
                question: question_id.clone(),
            };
            warn!("[试卷 {}] ⚠️ {}", paper_index, e);
            stats.skipped += 1;
            continue;
        }
        for paper_id in &targets {
            builder.update_question_marks(paper_id, *marks);
        }
    }

    for (section, attempt) in attempt_rules {
        builder.update_attempt_rule(*section, *attempt);
    }

    (builder, stats)
}

async fn export_html(
    exporter: &PdfExporter,
    html: &str,
    name: &str,
    options: RenderOptions,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    if options.dry_run || options.keep_html {
        files.push(exporter.write_html(html, name).await?);
    }
    if !options.dry_run {
        files.push(exporter.export(html, name).await?);
    }
    Ok(())
}

async fn export_textbook_units<S: ContentSource>(
    catalog: &Catalog<S>,
    exporter: &PdfExporter,
    plan: &PaperPlan,
    base_name: &str,
    options: RenderOptions,
    paper_index: usize,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let manifest = match catalog
        .textbook_manifest(&plan.class_id, &plan.subject_id)
        .await
    {
        Loaded::Ready(Some(manifest)) => manifest,
        Loaded::Ready(None) => {
            warn!(
                "[试卷 {}] ⚠️ {}/{} 没有课本，跳过课本导出",
                paper_index, plan.class_id, plan.subject_id
            );
            return Ok(());
        }
        Loaded::Unavailable { reason } => {
            warn!("[试卷 {}] ⚠️ 课本目录不可用: {}", paper_index, reason);
            return Ok(());
        }
    };

    for number in &plan.textbook_units {
        let Some(unit) = manifest.units.iter().find(|u| u.unit == *number) else {
            warn!("[试卷 {}] ⚠️ 课本中没有单元 {}", paper_index, number);
            continue;
        };
        let pages = match catalog
            .unit_pages(&plan.class_id, &plan.subject_id, unit)
            .await
        {
            Loaded::Ready(pages) => pages,
            Loaded::Unavailable { reason } => {
                warn!("[试卷 {}] ⚠️ {}", paper_index, reason);
                continue;
            }
        };
        info!(
            "[试卷 {}] 📖 单元 {} ({} 页)",
            paper_index,
            unit.unit,
            pages.len()
        );
        let html = render_textbook(unit, &plan.class_id, &pages);
        let name = format!("{}-unit-{}", base_name, unit.unit);
        export_html(exporter, &html, &name, options, files).await?;
    }
    Ok(())
}

/// 处理单个组卷计划
pub async fn process_plan<S: ContentSource>(
    catalog: &Catalog<S>,
    exporter: &PdfExporter,
    plan: &PaperPlan,
    options: RenderOptions,
    paper_index: usize,
) -> Result<PlanOutcome> {
    // 计划本身有误时直接失败，不加载内容
    let attempt_rules = plan.attempt_rules()?;

    let (builder, stats) = build_paper(catalog, plan, &attempt_rules, paper_index).await;
    let paper = builder.paper();
    if paper.is_empty() {
        warn!("[试卷 {}] ⚠️ 试卷中没有任何题目", paper_index);
    }

    let total_marks = builder.total_marks();
    log_section_breakdown(paper_index, &builder.section_totals(), total_marks);

    let template = plan.template.unwrap_or(options.default_template);
    let spacing = SpacingSettings::default().apply(plan.spacing);
    info!("[试卷 {}] 🎨 模板: {}", paper_index, template);
    let html = render_paper(paper, &spacing, template);

    let name = plan.output_name(&paper.settings.paper_title);
    let mut files = Vec::new();
    export_html(exporter, &html, &name, options, &mut files).await?;

    if !plan.textbook_units.is_empty() {
        export_textbook_units(
            catalog,
            exporter,
            plan,
            &name,
            options,
            paper_index,
            &mut files,
        )
        .await?;
    }

    log_plan_complete(paper_index, &stats);
    Ok(PlanOutcome {
        stats,
        total_marks,
        files,
    })
}
