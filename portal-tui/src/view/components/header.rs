//! 顶部标题栏

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use portal_core::services::ShellView;
use portal_core::types::AlertKind;

use crate::view::theme::colors;

/// 渲染标题栏：左侧品牌，右侧紧急公告数与当前用户
pub fn render(view: &ShellView<'_>, frame: &mut Frame, area: Rect) {
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(16), Constraint::Length(48)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(" NOVAL", Style::default().fg(c.brand).add_modifier(Modifier::BOLD)),
        Span::raw(" PORTAL"),
    ]);
    frame.render_widget(Paragraph::new(brand).style(bar), columns[0]);

    let mut right = Vec::new();
    if let ShellView::Catalog(catalog) = view {
        let urgent = catalog
            .alerts
            .iter()
            .filter(|a| a.kind == AlertKind::Urgent)
            .count();
        if urgent > 0 {
            right.push(Span::styled("● ", Style::default().fg(c.error)));
            right.push(Span::raw(format!("{urgent} urgent  ")));
        }

        if let Some(identity) = catalog.identity {
            right.push(Span::styled(
                format!("[{}] ", identity.initials()),
                Style::default().fg(c.brand).add_modifier(Modifier::BOLD),
            ));
            right.push(Span::raw(format!(
                "{} · {} ",
                super::fit_width(&identity.display_name, 24),
                identity.role
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .style(bar),
        columns[1],
    );
}
