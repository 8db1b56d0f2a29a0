//! 快捷键帮助弹窗

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::theme::Styles;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Sign in",
        &[
            ("Tab / ↑↓", "Switch field"),
            ("Enter", "Sign in"),
            ("Ctrl+R", "Show or hide password"),
            ("Esc", "Cancel a pending sign-in"),
        ],
    ),
    (
        "Portal",
        &[
            ("←↑↓→ / hjkl", "Move selection"),
            ("Tab", "Applications / Documents"),
            ("Enter", "Open selection"),
            ("m", "Menu"),
            ("r", "Mobile access QR code"),
            ("L", "Sign out"),
            ("Esc", "Close menu or dialog"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

pub fn render(frame: &mut Frame) {
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::styled(*title, Styles::title()));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let area = super::centered_rect(48, lines.len() as u16 + 2, frame.area());
    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
