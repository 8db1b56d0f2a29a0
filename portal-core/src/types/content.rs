//! 门户内容：启动时固定的只读参考数据

use serde::Serialize;

use super::{AlertItem, Catalog, DocumentLink};

/// 门户内容
///
/// 由配置构建，之后不再修改；由 `PortalShell` 通过 `Arc` 共享持有。
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortalContent {
    /// 应用目录
    pub catalog: Catalog,
    /// 公告
    pub alerts: Vec<AlertItem>,
    /// 文档
    pub documents: Vec<DocumentLink>,
    /// 移动端访问地址（二维码内容）
    pub access_url: String,
}

impl PortalContent {
    /// 只有目录的内容
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }
}
