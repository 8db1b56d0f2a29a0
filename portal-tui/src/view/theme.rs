//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

use portal_core::types::{AlertKind, ThemePreference};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题
pub fn set_theme(theme: ThemePreference) {
    let index = match theme {
        ThemePreference::Dark => 0,
        ThemePreference::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    /// 品牌色（琥珀色）
    pub brand: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(245, 158, 11),
            highlight: Color::Rgb(15, 23, 42),
            selected_bg: Color::Rgb(51, 65, 85),
            selected_fg: Color::White,
            success: Color::Rgb(16, 185, 129),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),
            muted: Color::Rgb(128, 128, 128),
            brand: Color::Rgb(245, 158, 11),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 250, 252),
            fg: Color::Rgb(15, 23, 42),
            border: Color::Rgb(226, 232, 240),
            border_focused: Color::Rgb(217, 119, 6),
            highlight: Color::Rgb(15, 23, 42),
            selected_bg: Color::Rgb(254, 243, 199),
            selected_fg: Color::Black,
            success: Color::Rgb(5, 150, 105),
            warning: Color::Rgb(217, 119, 6),
            error: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            muted: Color::Rgb(100, 116, 139),
            brand: Color::Rgb(217, 119, 6),
        }
    }

    /// 卡片强调色，未知名称退回前景色
    pub fn accent(&self, name: Option<&str>) -> Color {
        match name {
            Some("cyan") => Color::Rgb(8, 145, 178),
            Some("indigo") => Color::Rgb(79, 70, 229),
            Some("slate") => Color::Rgb(100, 116, 139),
            Some("emerald") => Color::Rgb(5, 150, 105),
            Some("amber") => self.brand,
            _ => self.fg,
        }
    }

    /// 公告级别对应的颜色
    pub fn alert(&self, kind: AlertKind) -> Color {
        match kind {
            AlertKind::Urgent => self.error,
            AlertKind::Info => self.info,
            AlertKind::Success => self.success,
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 次要文字
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().brand)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
