//!
//! src/util/mod.rs
//! Util 层：与业务无关的终端基础设施
//!
//!     init_terminal()       启用 raw mode，进入备用屏幕
//!     restore_terminal()    恢复终端；无论主循环成功与否都要调用
//!     install_panic_hook()  panic 时先恢复终端再打印信息
//!

mod terminal;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
