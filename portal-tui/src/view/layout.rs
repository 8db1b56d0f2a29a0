//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use portal_core::services::ShellView;

use crate::model::{App, Modal};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let view = app.shell.view();

    components::header::render(&view, frame, main_layout[0]);

    match &view {
        ShellView::Login(login) => pages::login::render(app, login, frame, main_layout[1]),
        ShellView::Catalog(catalog) => {
            pages::catalog::render(app, catalog, frame, main_layout[1]);

            // 浮层（在主内容之上）
            if catalog.menu_open {
                components::menu::render(catalog, frame, main_layout[1]);
            }
            if catalog.qr_open {
                components::qr_modal::render(app.access_qr.as_deref(), catalog.access_url, frame);
            }
        }
    }

    components::statusbar::render(app, &view, frame, main_layout[2]);

    // 帮助弹窗（在最上层）
    if let Some(Modal::Help) = app.modal.active {
        components::help::render(frame);
    }
}
