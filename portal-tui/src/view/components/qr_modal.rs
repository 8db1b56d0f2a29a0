//! 移动端访问二维码弹窗

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::theme::{colors, Styles};

/// `qr` 为预渲染的二维码文本，缺失时只显示地址
pub fn render(qr: Option<&str>, access_url: &str, frame: &mut Frame) {
    let c = colors();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(
        "Scan to open the portal on your phone",
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(""));

    if let Some(qr) = qr {
        lines.extend(qr.lines().map(|row| Line::raw(row.to_string())));
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(access_url.to_string(), Style::default().fg(c.brand)));
    lines.push(Line::from(""));
    lines.push(Line::styled("Esc to close", Styles::muted()));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = super::centered_rect(content_width + 4, lines.len() as u16 + 2, frame.area());

    let block = Block::default()
        .title(" Mobile Access ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
