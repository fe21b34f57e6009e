use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn instructions(app: &App) -> &'static str {
    if !app.conversation.is_open() {
        "Enter to open the assistant, 'q' to quit."
    } else if app.conversation.is_awaiting_language() {
        "Left/Right to pick a language and Enter to choose it, or type one. Esc to close."
    } else {
        "Type your message and press Enter to send. Ctrl+L to change language, Esc to close."
    }
}

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let footer = Paragraph::new(instructions(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
