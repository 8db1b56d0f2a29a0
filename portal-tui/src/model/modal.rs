//! 弹窗状态
//!
//! 菜单与二维码浮层由 `PortalShell` 管理，这里只有终端自己的帮助弹窗。

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
