//! 门户配置类型定义

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};

use super::{AlertItem, AlertKind, Catalog, CatalogEntry, DocumentLink, PortalContent};
use crate::error::PortalResult;

/// 验证超时上限（毫秒）
pub const MAX_VERIFICATION_TIMEOUT_MS: u64 = 60_000;

/// 界面主题偏好
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

/// 本地验证器使用的账户记录
///
/// 仅作为真实认证服务的替身，默认配置中的 `admin` 账户是演示占位。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub role: String,
}

/// 门户配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    /// 是否需要登录才能看到目录
    pub require_login: bool,
    /// 凭证验证超时（毫秒）
    pub verification_timeout_ms: u64,
    /// 移动端访问地址
    pub access_url: String,
    /// 主题
    pub theme: ThemePreference,
    /// 应用目录（按声明顺序展示）
    pub catalog: Vec<CatalogEntry>,
    /// 公告
    pub alerts: Vec<AlertItem>,
    /// 文档
    pub documents: Vec<DocumentLink>,
    /// 本地验证器的账户表
    pub accounts: Vec<AccountRecord>,
}

impl PortalConfig {
    /// 验证超时，限制在 1ms 到 60s 之间
    pub fn verification_timeout(&self) -> Duration {
        Duration::from_millis(self.verification_timeout_ms.clamp(1, MAX_VERIFICATION_TIMEOUT_MS))
    }

    /// 校验目录并构建只读内容
    pub fn to_content(&self) -> PortalResult<PortalContent> {
        Ok(PortalContent {
            catalog: Catalog::new(self.catalog.clone())?,
            alerts: self.alerts.clone(),
            documents: self.documents.clone(),
            access_url: self.access_url.clone(),
        })
    }

    /// 从 JSON 解析，缺失字段使用默认值
    pub fn from_json(json: &str) -> PortalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PortalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        let now = Utc::now();

        Self {
            require_login: true,
            verification_timeout_ms: 5_000,
            access_url: "http://localhost:5173".to_string(),
            theme: ThemePreference::default(),
            catalog: vec![
                CatalogEntry::unavailable(
                    "novauto",
                    "NovAuto",
                    "Fleet management. Schedule maintenance, track vehicle location and manage bookings.",
                )
                .with_accent("cyan"),
                CatalogEntry::launchable(
                    "novaudit",
                    "NovAudit",
                    "Technical audit and compliance tooling for property inspections and safety checks.",
                    "https://controlpro-iota.vercel.app/",
                )
                .with_accent("indigo"),
                CatalogEntry::launchable(
                    "novalog",
                    "Novalog",
                    "Warehouse and inventory control. Real-time stock tracking for building materials.",
                    "https://gestionalmacen.qtc-solutions.com",
                )
                .with_accent("slate"),
                CatalogEntry::launchable(
                    "novalworks",
                    "NovalWorks",
                    "Project management suite. Gantt charts, resource allocation and schedule tracking.",
                    "https://timegest.qtc-solutions.com/auth",
                )
                .with_accent("emerald"),
            ],
            alerts: vec![
                AlertItem {
                    id: 1,
                    title: "Server maintenance scheduled for Friday 22:00 EST".to_string(),
                    published_at: now - ChronoDuration::hours(2),
                    kind: AlertKind::Info,
                },
                AlertItem {
                    id: 2,
                    title: "Urgent: submit Q3 expense reports before 5 PM".to_string(),
                    published_at: now - ChronoDuration::hours(4),
                    kind: AlertKind::Urgent,
                },
                AlertItem {
                    id: 3,
                    title: "New safety protocols updated for Site B".to_string(),
                    published_at: now - ChronoDuration::days(1),
                    kind: AlertKind::Success,
                },
            ],
            documents: vec![
                DocumentLink {
                    title: "Employee Handbook 2024".to_string(),
                    size_label: "2.4 MB".to_string(),
                    destination: None,
                },
                DocumentLink {
                    title: "IT Security Guidelines".to_string(),
                    size_label: "1.1 MB".to_string(),
                    destination: None,
                },
                DocumentLink {
                    title: "Holiday Calendar".to_string(),
                    size_label: "0.5 MB".to_string(),
                    destination: None,
                },
            ],
            // 演示占位账户，不是生产行为
            accounts: vec![AccountRecord {
                username: "admin".to_string(),
                password: "admin".to_string(),
                display_name: "Administrator".to_string(),
                role: "Admin".to_string(),
            }],
        }
    }
}
