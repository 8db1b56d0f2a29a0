//! 浮层消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayMessage {
    /// 展开 / 收起菜单
    ToggleMenu,
    /// 打开移动端访问二维码
    OpenQr,
    /// 关闭二维码
    CloseQr,
}
