//! Backend 层：与终端 UI 无关的平台实现
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写（JSON）
//!         mod logging;            // tracing 日志输出到文件
//!         mod navigator;          // 系统浏览器打开外部地址
//!         mod qr;                 // 二维码文本渲染
//!
//! portal-core 只定义 `CredentialVerifier` / `ExternalNavigator` 两个 trait，
//! 这里提供终端平台上的具体实现，并在 main.rs 中注入 `ServiceContext`。

mod config_service;
mod logging;
mod navigator;
mod qr;

pub use config_service::{default_config_dir, ConfigService, FileConfigService};
pub use logging::{default_log_file, init_logging};
pub use navigator::SystemBrowserNavigator;
pub use qr::QrTextRenderer;
