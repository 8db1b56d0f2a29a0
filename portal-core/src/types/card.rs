//! 卡片状态类型定义

use serde::Serialize;

use super::CatalogEntry;

/// 卡片被禁用的原因（仅用于展示）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DisabledReason {
    /// 条目标记为不可用
    NotYetAvailable,
    /// 条目标记为可用，但缺少目标地址
    MissingDestination,
}

impl DisabledReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotYetAvailable => "not yet available",
            Self::MissingDestination => "destination not configured",
        }
    }
}

/// 卡片的解析结果
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CardState {
    /// 可点击，打开外部地址
    Launchable { destination: String },
    /// 不可点击
    Disabled { reason: DisabledReason },
}

impl CardState {
    pub fn is_launchable(&self) -> bool {
        matches!(self, Self::Launchable { .. })
    }
}

/// 条目与其解析状态的组合，供渲染使用
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCard<'a> {
    pub entry: &'a CatalogEntry,
    pub state: CardState,
}

impl ResolvedCard<'_> {
    /// 卡片底部的状态文字
    pub fn status_label(&self) -> &'static str {
        match self.state {
            CardState::Launchable { .. } => "OPEN APPLICATION",
            CardState::Disabled { .. } => "IN DEVELOPMENT",
        }
    }
}
