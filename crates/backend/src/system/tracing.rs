use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::config::{self, LoggingConfig};

/// Инициализация системы трассировки (tracing)
///
/// Логи пишутся в:
/// - stdout (с цветами)
/// - `<logging.dir>/backend.log` (без цветов)
///
/// Фильтр берётся из `RUST_LOG`, иначе из `logging.filter`.
pub fn initialize(logging: &LoggingConfig) -> anyhow::Result<()> {
    let log_dir = config::resolve_path(&logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e)
    })?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| {
            anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e)
        })?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| logging.filter.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    ::tracing::info!(
        "Logging initialized: filter '{}', file {}",
        filter,
        log_file_path.display()
    );
    Ok(())
}
