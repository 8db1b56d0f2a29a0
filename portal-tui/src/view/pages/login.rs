//! 登录页

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use portal_core::services::LoginView;

use crate::model::{App, LoginField};
use crate::view::components::centered_rect;
use crate::view::theme::{colors, Styles};

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 16;

pub fn render(app: &App, view: &LoginView<'_>, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    let block = Block::default()
        .title(" Sign In ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(form_area);

    frame.render_widget(Clear, form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // 欢迎语
            Constraint::Length(1), // 用户名标签
            Constraint::Length(3), // 用户名
            Constraint::Length(1), // 密码标签
            Constraint::Length(3), // 密码
            Constraint::Min(1),    // 错误 / 进度
        ])
        .split(inner);

    let welcome = vec![
        Line::styled(
            "Welcome to the Noval Portal",
            Style::default().fg(c.brand).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Sign in to access your tools", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(welcome).alignment(Alignment::Center), rows[0]);

    let editable = !view.authenticating;
    let form = &app.login;

    frame.render_widget(Paragraph::new("Username").style(Styles::muted()), rows[1]);
    render_field(
        frame,
        rows[2],
        &form.username,
        editable && form.field == LoginField::Username,
    );

    let password_label = if form.show_password {
        "Password (visible)"
    } else {
        "Password"
    };
    frame.render_widget(Paragraph::new(password_label).style(Styles::muted()), rows[3]);
    render_field(
        frame,
        rows[4],
        &form.password_display(),
        editable && form.field == LoginField::Password,
    );

    let footer = if view.authenticating {
        Some(Line::styled("Signing in...", Style::default().fg(c.brand)))
    } else {
        view.last_error
            .map(|err| Line::styled(err.to_string(), Style::default().fg(c.error)))
    };
    if let Some(line) = footer {
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[5],
        );
    }
}

/// 单行输入框，聚焦时显示光标
fn render_field(frame: &mut Frame, area: Rect, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    // 超出宽度时只显示末尾部分
    let visible = tail_fitting(value, inner.width.saturating_sub(1) as usize);
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(colors().fg)).block(block),
        area,
    );

    if focused {
        let offset = visible.width().min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

fn tail_fitting(value: &str, max: usize) -> &str {
    let mut start = value.len();
    let mut used = 0;
    for (i, c) in value.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    &value[start..]
}
