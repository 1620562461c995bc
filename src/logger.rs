use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 info（`verbose` 时为 debug），可用 `RUST_LOG` 覆盖。
/// 日志写到 stderr，stdout 只留给报表。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
