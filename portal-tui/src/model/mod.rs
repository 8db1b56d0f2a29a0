//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是终端界面状态的唯一来源，所有状态变更都通过 Update 层触发。
//! 门户本身的状态（会话、目录、浮层）由 portal-core 的 `PortalShell` 持有，
//! 这里只补充终端特有的部分：
//!
//!     - LoginForm        登录表单的输入内容与焦点字段
//!     - FocusPanel       目录网格 / 文档列表之间的焦点
//!     - GridSelection    目录卡片的网格选中位置
//!     - ListSelection    文档列表的选中位置
//!     - ModalState       帮助弹窗
//!
//! 验证请求由 Update 层放入 `App::pending`，主循环取出后交给 tokio 执行，
//! 结果通过 channel 回到主循环，再以 `AppMessage::VerificationFinished` 进入 Update 层。
//!

mod app;
mod focus;
mod login;
mod modal;
mod selection;

pub use app::App;
pub use focus::FocusPanel;
pub use login::{LoginField, LoginForm};
pub use modal::{Modal, ModalState};
pub use selection::{GridSelection, ListSelection, CARD_COLUMNS};
