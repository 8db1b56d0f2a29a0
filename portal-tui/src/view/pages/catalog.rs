//! 目录页：应用卡片网格 + 侧边栏

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use portal_core::services::CatalogView;
use portal_core::types::{CardState, ResolvedCard};

use crate::model::{App, CARD_COLUMNS};
use crate::view::components::{fit_width, sidebar};
use crate::view::theme::{colors, Styles};

const CARD_HEIGHT: u16 = 7;

pub fn render(app: &App, view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_welcome(view, frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(rows[1]);

    render_applications(app, view, frame, columns[0]);
    sidebar::render(app, view, frame, columns[1]);
}

fn render_welcome(view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let c = colors();
    let greeting = match view.identity {
        Some(identity) => format!(" Welcome to the Noval Portal, {}", identity.display_name),
        None => " Welcome to the Noval Portal".to_string(),
    };

    let lines = vec![
        Line::styled(greeting, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::styled(
            " Access all of your management tools from one place.",
            Styles::muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_applications(app: &App, view: &CatalogView<'_>, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_catalog();

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CARD_HEIGHT + 2), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .title(" Available Applications ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let grid_area = block.inner(sections[0]);
    frame.render_widget(block, sections[0]);

    render_grid(app, &view.cards, focused, frame, grid_area);

    let status = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(colors().success)),
        Span::styled("All systems operational", Styles::muted()),
    ]))
    .block(
        Block::default()
            .title(" System Status ")
            .borders(Borders::ALL)
            .border_style(Styles::border(false)),
    );
    frame.render_widget(status, sections[1]);
}

/// 按行渲染卡片；行数超出可视高度时以选中行为准向下滚动
fn render_grid(
    app: &App,
    cards: &[ResolvedCard<'_>],
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No applications configured").style(Styles::muted()),
            area,
        );
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let (selected_row, _) = app.cards.position();
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let selected = app.cards.current();

    let rows = cards
        .chunks(CARD_COLUMNS)
        .enumerate()
        .skip(first_row)
        .take(visible_rows);

    for (visible_index, (row_index, row)) in rows.enumerate() {
        let row_area = Rect::new(
            area.x,
            area.y + visible_index as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT.min(area.height.saturating_sub(visible_index as u16 * CARD_HEIGHT)),
        );
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(row_area);

        for (column, card) in row.iter().enumerate() {
            let index = row_index * CARD_COLUMNS + column;
            let is_selected = focused && selected == Some(index);
            render_card(card, is_selected, frame, cells[column]);
        }
    }
}

fn render_card(card: &ResolvedCard<'_>, selected: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let launchable = card.state.is_launchable();
    let accent = if launchable {
        c.accent(card.entry.accent.as_deref())
    } else {
        c.muted
    };

    let border_style = if selected {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.border)
    };
    let title_width = area.width.saturating_sub(4) as usize;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", fit_width(&card.entry.title, title_width)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let description_style = if launchable {
        Style::default().fg(c.fg)
    } else {
        Styles::muted()
    };
    frame.render_widget(
        Paragraph::new(card.entry.description.as_str())
            .style(description_style)
            .wrap(Wrap { trim: true }),
        parts[0],
    );

    let footer = match &card.state {
        CardState::Launchable { .. } => Span::styled(
            format!("{} ↗", card.status_label()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        CardState::Disabled { reason } => Span::styled(
            format!("{} · {}", card.status_label(), reason.message()),
            Styles::muted(),
        ),
    };
    let footer_style = if selected { Styles::selected() } else { Style::default() };
    frame.render_widget(
        Paragraph::new(Line::from(footer))
            .alignment(Alignment::Right)
            .style(footer_style),
        parts[1],
    );
}
