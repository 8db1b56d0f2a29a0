//! 侧边栏内容类型定义（公告、文档）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 公告级别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Urgent,
    Info,
    Success,
}

/// 公告
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub id: u32,
    pub title: String,
    /// 发布时间
    #[serde(with = "crate::utils::datetime")]
    pub published_at: DateTime<Utc>,
    pub kind: AlertKind,
}

impl AlertItem {
    /// 相对发布时间，例如 "2 hours ago"
    pub fn age(&self, now: DateTime<Utc>) -> String {
        crate::utils::datetime::relative_age(self.published_at, now)
    }
}

/// 文档链接
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLink {
    pub title: String,
    /// 文件大小标签，例如 "2.4 MB"
    pub size_label: String,
    /// 文档地址（没有时仅展示）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl DocumentLink {
    pub fn destination(&self) -> Option<&str> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
