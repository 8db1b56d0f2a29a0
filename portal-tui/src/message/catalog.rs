//! 目录页面消息

/// 目录页面消息，作用于当前焦点面板
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMessage {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SelectFirst,
    SelectLast,
    /// 打开选中的应用或文档
    Activate,
}
