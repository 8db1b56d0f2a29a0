//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use portal_core::services::ShellView;

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, view: &ShellView<'_>, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app, view);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// 根据当前界面生成快捷键提示
fn get_hints(app: &App, view: &ShellView<'_>) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close")];
    }

    match view {
        ShellView::Login(login) if login.authenticating => vec![("Esc", "Cancel"), ("Ctrl+C", "Quit")],
        ShellView::Login(_) => vec![
            ("Tab", "Next Field"),
            ("Enter", "Sign In"),
            ("Ctrl+R", "Show Password"),
            ("Ctrl+C", "Quit"),
        ],
        ShellView::Catalog(catalog) if catalog.qr_open => vec![("Esc", "Close")],
        ShellView::Catalog(catalog) => {
            let mut hints = vec![("Tab", "Switch Panels")];
            match app.focus {
                FocusPanel::Catalog => {
                    hints.push(("←↑↓→", "Select"));
                    hints.push(("Enter", "Open App"));
                }
                FocusPanel::Documents => {
                    hints.push(("↑↓", "Select"));
                    hints.push(("Enter", "Open Document"));
                }
            }
            hints.push(("m", "Menu"));
            hints.push(("r", "Mobile Access"));
            if catalog.identity.is_some() {
                hints.push(("L", "Sign Out"));
            }
            hints.push(("?", "Help"));
            hints.push(("q", "Quit"));
            hints
        }
    }
}
