//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。主更新函数对 AppMessage 穷举匹配，
//! 子消息委托给子模块：
//!
//!     login.rs        登录表单输入、提交，以及后台验证结果
//!     catalog.rs      选中位置移动、打开应用或文档
//!     overlay.rs      菜单与二维码浮层
//!
//! 提交登录时不会在这里等待验证器：`begin_login` 得到的 `PendingVerification`
//! 交给主循环派发，结果以 `VerificationFinished` 消息回到这里。
//!

mod catalog;
mod login;
mod overlay;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if app.shell.is_catalog_visible() && !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Login(login_msg) => {
            login::update(app, login_msg);
        }

        AppMessage::Catalog(catalog_msg) => {
            catalog::update(app, catalog_msg);
        }

        AppMessage::Overlay(overlay_msg) => {
            overlay::update(app, overlay_msg);
        }

        AppMessage::VerificationFinished(outcome) => {
            login::finish(app, outcome);
        }

        AppMessage::Logout => {
            if app.shell.logout() {
                app.reset_navigation();
                app.set_status("Signed out");
            }
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// Esc：由内向外逐层关闭
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
    } else if app.shell.cancel_login() {
        app.set_status("Sign-in cancelled");
    } else if !app.shell.dismiss_overlays() {
        app.clear_status();
    }
}
