use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::constants::CHANGE_LANGUAGE_LABEL;
use crate::language::LanguageCode;

/// The language buttons while none is chosen, the change-language button
/// afterwards.
pub fn language_row(app: &App) -> Line<'static> {
    if !app.conversation.is_awaiting_language() {
        return Line::from(vec![
            Span::styled(
                format!("[ {} ]", CHANGE_LANGUAGE_LABEL),
                Style::default().fg(Color::LightMagenta),
            ),
            Span::styled(" Ctrl+L", Style::default().fg(Color::DarkGray)),
        ]);
    }

    let picked = app.picked_language();
    let mut spans = Vec::new();
    for (i, lang) in LanguageCode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if lang == picked {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightYellow)
        };
        spans.push(Span::styled(format!("[ {} ]", lang.name()), style));
    }
    Line::from(spans)
}

pub fn draw_language_row(f: &mut Frame<'_>, area: Rect, app: &App) {
    f.render_widget(Paragraph::new(language_row(app)), area);
}
