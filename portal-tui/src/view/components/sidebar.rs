//! 侧边栏：公告与文档

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use portal_core::services::CatalogView;

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_alerts(view, frame, rows[0]);
    render_documents(app, view, frame, rows[1]);
}

fn render_alerts(view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let c = colors();
    let now = Utc::now();

    let block = Block::default()
        .title(" News & Alerts ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let mut lines = Vec::new();
    for alert in view.alerts {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(c.alert(alert.kind))),
            Span::styled(alert.title.clone(), Style::default().fg(c.fg)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", alert.age(now)),
            Styles::muted(),
        )));
        lines.push(Line::from(""));
    }
    if view.alerts.is_empty() {
        lines.push(Line::styled("  No news", Styles::muted()));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_documents(app: &App, view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_documents();

    let block = Block::default()
        .title(" Documentation ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = view
        .documents
        .iter()
        .map(|doc| {
            let title_style = if doc.destination().is_some() {
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(vec![
                Line::styled(super::fit_width(&doc.title, width), title_style),
                Line::styled(format!("{} • PDF", doc.size_label), Styles::muted()),
            ])
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(app.documents.current());
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut state);
}
