//! 应用目录相关类型定义

use std::collections::HashSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// 目录条目：门户可以链接到的一个外部工具
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 稳定唯一标识，不可复用
    pub id: String,
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 外部地址（仅可启动的条目才有）
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// 是否可用；为 false 时忽略 `destination`
    #[serde(default = "default_available")]
    pub available: bool,
    /// 强调色（纯展示用途）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

const fn default_available() -> bool {
    true
}

impl CatalogEntry {
    /// 创建可启动条目
    pub fn launchable(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            destination: Some(destination.into()),
            available: true,
            accent: None,
        }
    }

    /// 创建尚未开放的条目
    pub fn unavailable(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            destination: None,
            available: false,
            accent: None,
        }
    }

    /// 设置强调色
    #[must_use]
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    /// 非空白的目标地址
    pub fn destination(&self) -> Option<&str> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// 标记为可用却没有地址的条目（配置缺陷）
    pub fn is_malformed(&self) -> bool {
        self.available && self.destination().is_none()
    }
}

/// 不可变的应用目录，顺序即声明顺序
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// 校验并创建目录
    ///
    /// id 必须非空且唯一。可用但缺少地址的条目会被保留（解析为 Disabled），仅记录警告。
    pub fn new(entries: Vec<CatalogEntry>) -> PortalResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(PortalError::EmptyCatalogId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(PortalError::DuplicateCatalogId(entry.id.clone()));
            }
            if entry.is_malformed() {
                log::warn!(
                    "{}",
                    PortalError::MalformedCatalogEntry(format!(
                        "'{}' is marked available but has no destination",
                        entry.id
                    ))
                );
            }
        }

        Ok(Self { entries })
    }

    /// 条目列表
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// 按位置获取
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// 按 id 查找
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = CatalogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
