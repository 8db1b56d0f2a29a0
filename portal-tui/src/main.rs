//! Noval Portal TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 平台实现 (`backend/`)
//!
//! 启动顺序：解析参数 → 初始化日志 → 加载配置 → 组装 `PortalShell`
//! → 初始化终端 → 主循环 → 恢复终端（无论成功与否）。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use portal_core::services::{PortalShell, ShellOptions};
use portal_core::traits::ConfiguredCredentialVerifier;
use portal_core::types::PortalConfig;
use portal_core::ServiceContext;

use backend::{ConfigService, FileConfigService, QrTextRenderer, SystemBrowserNavigator};
use util::{init_terminal, install_panic_hook, restore_terminal};

/// Terminal portal for the Noval internal applications
#[derive(Debug, Parser)]
#[command(name = "noval-portal", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/noval-portal/portal.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the catalog without signing in
    #[arg(long)]
    no_login: bool,

    /// Log file (defaults to <config dir>/noval-portal/portal.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 日志（写文件，终端留给 UI）
    let log_file = cli.log_file.clone().unwrap_or_else(backend::default_log_file);
    backend::init_logging(&log_file)?;

    // 2. 配置
    let config_service = cli
        .config
        .clone()
        .map_or_else(FileConfigService::default_location, FileConfigService::new);

    if cli.init_config {
        return write_default_config(&config_service);
    }

    let mut config = config_service.load()?;
    if cli.no_login {
        config.require_login = false;
    }
    view::theme::set_theme(config.theme);

    // 3. 组装门户
    let content = config.to_content()?;
    let access_qr = QrTextRenderer.render(&content.access_url);

    let ctx = Arc::new(ServiceContext::new(
        Arc::new(ConfiguredCredentialVerifier::new(config.accounts.clone())),
        Arc::new(SystemBrowserNavigator),
    ));
    let shell = PortalShell::new(Arc::new(content), ctx, ShellOptions::from_config(&config));
    let mut app = model::App::new(shell, access_qr);

    let runtime = tokio::runtime::Runtime::new()?;
    tracing::info!("Noval Portal started (login required: {})", config.require_login);

    // 4. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, runtime.handle());

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    tracing::info!("Noval Portal closed");

    result
}

fn write_default_config(service: &dyn ConfigService) -> Result<()> {
    let path = service.path();
    if path.exists() {
        bail!("{} already exists, not overwriting", path.display());
    }

    service.save(&PortalConfig::default())?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
