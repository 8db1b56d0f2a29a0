//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CatalogMessage, LoginMessage, OverlayMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if !app.shell.is_catalog_visible() {
        return handle_login_keys(key);
    }

    if app.shell.qr().is_open() {
        return handle_qr_keys(key);
    }

    handle_catalog_keys(key)
}

/// 帮助弹窗：任意关闭键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || key.code == KeyCode::Enter
    {
        AppMessage::GoBack
    } else {
        AppMessage::Noop
    }
}

/// 登录表单：字符全部作为输入，不响应单字母快捷键
fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Login(LoginMessage::Submit);
    }
    if DefaultKeymap::REVEAL_PASSWORD.matches(&key) {
        return AppMessage::Login(LoginMessage::TogglePasswordVisibility);
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            AppMessage::Login(LoginMessage::SwitchField)
        }
        KeyCode::Backspace => AppMessage::Login(LoginMessage::Backspace),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Login(LoginMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 二维码弹窗：只处理关闭
fn handle_qr_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::OPEN_QR.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || key.code == KeyCode::Enter
    {
        AppMessage::Overlay(OverlayMessage::CloseQr)
    } else {
        AppMessage::Noop
    }
}

/// 目录界面
fn handle_catalog_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::TOGGLE_MENU.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::ToggleMenu);
    }
    if DefaultKeymap::OPEN_QR.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenQr);
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }
    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Catalog(CatalogMessage::Activate);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Catalog(CatalogMessage::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Catalog(CatalogMessage::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Catalog(CatalogMessage::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Catalog(CatalogMessage::MoveRight),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Catalog(CatalogMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Catalog(CatalogMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}
