use crate::models::plan::PaperPlan;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载组卷计划
pub async fn load_paper_plan(toml_file_path: &Path) -> Result<PaperPlan> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取组卷计划: {}", toml_file_path.display()))?;

    let plan: PaperPlan = toml::from_str(&content)
        .with_context(|| format!("无法解析组卷计划: {}", toml_file_path.display()))?;

    Ok(plan.with_file_path(toml_file_path.to_string_lossy().to_string()))
}

/// 加载文件夹中所有的组卷计划（按文件名排序）
///
/// 单个文件解析失败只记录警告，不影响其他计划。
pub async fn load_all_plans(folder_path: &str) -> Result<Vec<PaperPlan>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut plans = Vec::new();
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_paper_plan(&path).await {
            Ok(plan) => {
                tracing::info!(
                    "成功加载计划: {} 个选题章节, {} 道自定义题目",
                    plan.picks.len(),
                    plan.custom.len()
                );
                plans.push(plan);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    if plans.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到可用的组卷计划", folder_path);
    }

    Ok(plans)
}
