//! 下拉菜单浮层

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use portal_core::services::CatalogView;

use crate::view::theme::Styles;

const MENU_WIDTH: u16 = 30;

/// 在内容区右上角展开菜单
pub fn render(view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let mut entries = vec![
        ("Tab", "Applications / Documents"),
        ("r", "Mobile access (QR)"),
        ("?", "Keyboard help"),
    ];
    if view.identity.is_some() {
        entries.push(("L", "Sign out"));
    }
    entries.push(("q", "Quit"));

    let height = entries.len() as u16 + 2;
    let width = MENU_WIDTH.min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y,
        width,
        height.min(area.height),
    );

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!(" {key:<4}"), Styles::hint_key()),
                Span::raw(label),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
