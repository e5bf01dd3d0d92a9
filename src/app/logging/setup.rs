//! 日志系统初始化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志过滤规则
const DEFAULT_FILTER: &str = "pagination_state=info";
/// 详细模式的日志过滤规则
const VERBOSE_FILTER: &str = "pagination_state=debug";

/// 初始化日志系统
///
/// 日志写入标准错误，避免与终端界面的输出混在一起。
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr),
        )
        .init();
}
