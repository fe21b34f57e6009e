use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::constants::WIDGET_TITLE;

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(WIDGET_TITLE)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let language = match app.conversation.language() {
        Some(lang) => format!("Language: {}", lang.name()),
        None => "Language: not selected".to_string(),
    };
    let badge = Paragraph::new(language)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Right);
    f.render_widget(badge, chunks[1]);
}
