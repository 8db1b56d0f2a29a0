//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁，把按键翻译成 Update 能够看懂的消息。
//!
//!     AppMessage          主消息（退出、焦点、帮助、返回……）
//!     LoginMessage        登录表单子消息
//!     CatalogMessage      目录网格与文档列表子消息
//!     OverlayMessage      菜单与二维码浮层子消息
//!
//! 验证结果不是用户输入，但同样以 `AppMessage::VerificationFinished` 的形式进入 Update 层，
//! 保证 Update 仍然是唯一修改状态的地方。
//!

mod app;
mod catalog;
mod login;
mod overlay;

pub use app::AppMessage;
pub use catalog::CatalogMessage;
pub use login::LoginMessage;
pub use overlay::OverlayMessage;
