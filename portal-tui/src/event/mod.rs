//!
//! src/event/mod.rs
//! Event 层：把 crossterm 输入事件翻译成 Message
//!
//!     poll_event      事件轮询，由 app.rs 主循环调用，最长等待 timeout
//!     handle_event    事件分发，根据当前界面返回一个 AppMessage
//!
//! 按键分发顺序：
//!     1. Ctrl+C 任何时候都退出
//!     2. 帮助弹窗打开时，只处理关闭
//!     3. 登录界面：表单输入
//!     4. 二维码打开时，只处理关闭
//!     5. 目录界面：全局快捷键，然后是当前焦点面板的移动与打开
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
