//! 卡片状态解析
//!
//! `available && destination` → `Launchable`，其余一律 `Disabled`。
//! 纯函数，无副作用；渲染层只根据解析结果分支。

use crate::traits::ExternalNavigator;
use crate::types::{Catalog, CardState, CatalogEntry, DisabledReason, ResolvedCard};

/// 解析单个条目
pub fn resolve(entry: &CatalogEntry) -> CardState {
    if !entry.available {
        return CardState::Disabled {
            reason: DisabledReason::NotYetAvailable,
        };
    }

    match entry.destination() {
        Some(destination) => CardState::Launchable {
            destination: destination.to_string(),
        },
        None => CardState::Disabled {
            reason: DisabledReason::MissingDestination,
        },
    }
}

/// 按声明顺序解析整个目录
pub fn resolve_all(catalog: &Catalog) -> Vec<ResolvedCard<'_>> {
    catalog
        .iter()
        .map(|entry| ResolvedCard {
            entry,
            state: resolve(entry),
        })
        .collect()
}

/// 可启动卡片的激活句柄
///
/// 只能从 `Launchable` 状态获得，因此禁用卡片在类型上就没有 `activate`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher<'a> {
    destination: &'a str,
}

impl Launcher<'_> {
    pub fn destination(&self) -> &str {
        self.destination
    }

    /// 请求导航器在新上下文中打开目标地址
    pub fn activate(self, navigator: &dyn ExternalNavigator) {
        log::info!("Opening {}", self.destination);
        navigator.open_external(self.destination);
    }
}

impl CardState {
    /// 激活句柄，禁用卡片返回 `None`
    pub fn launcher(&self) -> Option<Launcher<'_>> {
        match self {
            CardState::Launchable { destination } => Some(Launcher {
                destination: destination.as_str(),
            }),
            CardState::Disabled { .. } => None,
        }
    }
}
