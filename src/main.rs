use anyhow::Result;
use paper_builder::config::Config;
use paper_builder::logger;
use paper_builder::orchestrator::PaperApp;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logger::init_with(config.verbose_logging);

    // 命令行参数优先于 PAPER_PLAN
    let plan_path = std::env::args().nth(1);

    // 初始化并运行应用
    let stats = PaperApp::initialize(config)
        .await?
        .run(plan_path.as_deref())
        .await?;

    if stats.failed > 0 {
        anyhow::bail!("{} 个组卷计划处理失败", stats.failed);
    }

    Ok(())
}
