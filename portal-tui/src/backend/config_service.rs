//! 配置服务
//!
//! 配置文件默认位于 `<config_dir>/noval-portal/portal.json`。
//! 文件不存在时使用内置默认配置；JSON 格式错误在启动时报告。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portal_core::types::PortalConfig;
use portal_core::PortalError;

const CONFIG_FILE: &str = "portal.json";

/// 获取配置目录路径
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noval-portal")
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 配置文件路径
    fn path(&self) -> &Path;

    /// 加载配置
    fn load(&self) -> Result<PortalConfig>;

    /// 保存配置
    fn save(&self, config: &PortalConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置的配置文件
    pub fn default_location() -> Self {
        Self::new(default_config_dir().join(CONFIG_FILE))
    }
}

impl ConfigService for FileConfigService {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PortalConfig> {
        if !self.path.exists() {
            log::info!(
                "No config file at {}, using built-in defaults",
                self.path.display()
            );
            return Ok(PortalConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = PortalConfig::from_json(&content).map_err(|e| {
            PortalError::ConfigError(format!("{}: {e}", self.path.display()))
        })?;

        log::info!(
            "Loaded config from {} ({} catalog entries)",
            self.path.display(),
            config.catalog.len()
        );
        Ok(config)
    }

    fn save(&self, config: &PortalConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let json = config.to_json()?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Config written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(tmp.path().join("absent.json"));

        let config = service.load().unwrap();
        let defaults = PortalConfig::default();
        assert_eq!(config.catalog, defaults.catalog);
        assert_eq!(config.accounts, defaults.accounts);
        assert!(!tmp.path().join("absent.json").exists());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(tmp.path().join("nested").join(CONFIG_FILE));

        let config = PortalConfig {
            require_login: false,
            access_url: "https://portal.example".to_string(),
            ..PortalConfig::default()
        };
        service.save(&config).unwrap();

        let loaded = service.load().unwrap();
        assert!(!loaded.require_login);
        assert_eq!(loaded.access_url, "https://portal.example");
        assert_eq!(loaded.catalog, config.catalog);
    }

    #[test]
    fn malformed_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = FileConfigService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "verificationTimeoutMs": 1500 }"#).unwrap();

        let config = FileConfigService::new(&path).load().unwrap();
        assert_eq!(config.verification_timeout_ms, 1500);
        assert!(config.require_login);
        assert!(!config.catalog.is_empty());
    }
}
