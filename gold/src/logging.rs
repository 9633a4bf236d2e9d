use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 设置默认的 Gold [`tracing`] 日志记录器。
///
/// 默认级别为 `INFO`，可通过 `RUST_LOG` 环境变量覆盖（例如 `RUST_LOG=gold=debug`）。
///
/// 注意：进程内只能调用一次，重复调用会 panic。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init()
}

/// 设置 JSON 格式输出的 Gold [`tracing`] 日志记录器。
///
/// 适用于由定时任务运行、日志被集中收集的场景。
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_writer(std::io::stderr),
        )
        .init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
