use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::markup::markup_to_lines;
use crate::app::App;
use crate::constants::{BOT_AVATAR, USER_AVATAR};
use crate::formatter::format_message;
use crate::models::{ChatMessage, Sender};

/// Bot text goes through the formatter; user text is shown as typed.
pub fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let (avatar, name, color) = match message.sender() {
        Sender::Bot => (BOT_AVATAR, "Raseed", Color::LightBlue),
        Sender::User => (USER_AVATAR, "You", Color::LightGreen),
    };
    let style = Style::default().fg(color);

    let mut lines = vec![Line::from(Span::styled(
        format!("{} {}", avatar, name),
        style.add_modifier(Modifier::BOLD),
    ))];

    match message.sender() {
        Sender::Bot => lines.extend(markup_to_lines(&format_message(message.text()), style)),
        Sender::User => lines.extend(
            message
                .text()
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), style))),
        ),
    }

    lines
}

pub fn draw_messages(f: &mut Frame<'_>, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for message in app.conversation.transcript() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(message));
    }

    let messages = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Scroll works in wrapped rows, not transcript lines.
    let total_rows = u16::try_from(messages.line_count(area.width)).unwrap_or(u16::MAX);
    let max_scroll = total_rows.saturating_sub(area.height);
    let offset = max_scroll.saturating_sub(app.scroll.min(max_scroll));

    f.render_widget(messages.scroll((offset, 0)), area);
}

pub fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App) {
    let input = app.conversation.input();
    let content = if input.is_empty() {
        Span::styled(app.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input, Style::default().fg(Color::White))
    };

    let paragraph = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);

    let x = area.x + 1 + input.width() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    f.set_cursor_position((x.min(max_x), area.y + 1));
}
