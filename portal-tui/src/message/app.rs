//! 应用主消息枚举

use portal_core::services::VerificationOutcome;

use super::{CatalogMessage, LoginMessage, OverlayMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（目录 / 文档）
    ToggleFocus,

    /// 登录表单相关消息
    Login(LoginMessage),

    /// 目录相关消息
    Catalog(CatalogMessage),

    /// 浮层相关消息
    Overlay(OverlayMessage),

    /// 后台验证完成
    VerificationFinished(VerificationOutcome),

    /// 退出登录
    Logout,

    /// 返回（关闭弹窗 / 浮层，或取消正在进行的登录）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
