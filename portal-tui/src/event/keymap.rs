//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：大写字母本身已经带有这个信息。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 登录表单
    pub const REVEAL_PASSWORD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('r'));
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 目录
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const TOGGLE_MENU: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const OPEN_QR: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const LOGOUT: KeyBinding = KeyBinding::key(KeyCode::Char('L'));
}
