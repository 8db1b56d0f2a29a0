//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染 UI
//!
//!     layout.rs       三层布局（标题栏 + 主内容区 + 状态栏）与浮层叠放顺序
//!     theme.rs        深色 / 浅色配色
//!     pages/          登录页、目录页
//!     components/     标题栏、侧边栏、状态栏、菜单、二维码弹窗、帮助弹窗
//!
//! 渲染内容来自 `PortalShell::view()`：登录页或目录页二选一，
//! 卡片的可用状态已由 portal-core 解析好，这里只根据结果选择样式。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
