//! 日志初始化
//!
//! `RUST_LOG` 控制过滤级别，默认 `info`；`verbose` 为真时本 crate 提升到 `debug`。

use tracing_subscriber::EnvFilter;

pub fn init() {
    init_with(false);
}

pub fn init_with(verbose: bool) {
    let default_directive = if verbose {
        "info,paper_builder=debug"
    } else {
        "info,chromiumoxide=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 测试中可能被多次调用
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
