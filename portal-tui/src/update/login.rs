//! 登录表单更新逻辑

use portal_core::services::VerificationOutcome;

use crate::message::LoginMessage;
use crate::model::{App, LoginField, LoginForm};

/// 处理登录表单消息
pub fn update(app: &mut App, msg: LoginMessage) {
    // 验证进行中表单只读
    let busy = app.shell.session().is_busy();

    match msg {
        LoginMessage::Input(c) if !busy => app.login.input(c),
        LoginMessage::Backspace if !busy => app.login.backspace(),
        LoginMessage::SwitchField => app.login.switch_field(),
        LoginMessage::TogglePasswordVisibility => {
            app.login.show_password = !app.login.show_password;
        }
        LoginMessage::Submit => submit(app),
        LoginMessage::Input(_) | LoginMessage::Backspace => {}
    }
}

fn submit(app: &mut App) {
    match app.shell.begin_login(&app.login.username, &app.login.password) {
        Ok(pending) => {
            app.set_status(format!("Signing in as {}...", app.login.username.trim()));
            app.queue_verification(pending);
        }
        // 错误显示在表单的错误区域
        Err(e) if e.is_sign_in_failure() => {
            app.login.field = LoginField::Username;
            app.clear_status();
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

/// 应用后台验证的结果
pub fn finish(app: &mut App, outcome: VerificationOutcome) {
    if !app.shell.complete_login(outcome) {
        return;
    }

    let welcome = app
        .shell
        .session()
        .identity()
        .map(|identity| format!("Welcome, {}", identity.display_name));

    match welcome {
        Some(message) => {
            app.login = LoginForm::default();
            app.set_status(message);
        }
        None => {
            app.login.clear_password();
            app.login.field = LoginField::Password;
            app.clear_status();
        }
    }
}
