//! 焦点状态定义

/// 目录页面的焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 应用卡片网格
    #[default]
    Catalog,
    /// 侧边栏文档列表
    Documents,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Catalog => FocusPanel::Documents,
            FocusPanel::Documents => FocusPanel::Catalog,
        }
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, FocusPanel::Catalog)
    }

    pub fn is_documents(&self) -> bool {
        matches!(self, FocusPanel::Documents)
    }
}
