//! 外部导航抽象 Trait

/// 外部导航 Trait
///
/// 在新的上下文（系统浏览器、新标签页）中打开地址。即发即忘：
/// 失败由实现自行记录，门户不观察返回值。
pub trait ExternalNavigator: Send + Sync {
    /// 打开外部地址
    fn open_external(&self, url: &str);
}
