use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Shows a spinner while coaching replies are outstanding.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    waiting: u64,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_waiting(&mut self, pending_turns: u64) {
        self.waiting = pending_turns;
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting > 0
    }

    pub fn update_spinner(&mut self) {
        if self.is_waiting() {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn status_text(&self) -> String {
        match self.waiting {
            0 => String::new(),
            1 => "Waiting for Raseed...".to_string(),
            n => format!("Waiting for {} replies...", n),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let indicator = if self.is_waiting() {
            SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let status = Line::from(vec![
            Span::styled(indicator, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(self.status_text(), Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }
}
