//! 日志初始化
//!
//! 终端被 UI 占用，日志只能写入文件。`log` 宏（portal-core 使用）经由
//! tracing-subscriber 自带的 `tracing-log` 桥接输出到同一个文件。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::default_config_dir;

/// 默认日志文件
pub fn default_log_file() -> PathBuf {
    default_config_dir().join("portal.log")
}

/// 安装全局 tracing subscriber，`RUST_LOG` 未设置时默认 `info`
pub fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
