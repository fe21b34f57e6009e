use crate::constants::INPUT_PLACEHOLDER;
use crate::conversation::Conversation;
use crate::language::LanguageCode;
use crate::status_indicator::StatusIndicator;
use crate::translator::translate_follow_up;

pub struct App {
    pub conversation: Conversation,
    pub status_indicator: StatusIndicator,
    /// Highlighted language button while no language is set.
    pub picker_index: usize,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(conversation: Conversation) -> App {
        App {
            conversation,
            status_indicator: StatusIndicator::new(),
            picker_index: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn picked_language(&self) -> LanguageCode {
        LanguageCode::ALL[self.picker_index % LanguageCode::ALL.len()]
    }

    pub fn picker_next(&mut self) {
        self.picker_index = (self.picker_index + 1) % LanguageCode::ALL.len();
    }

    pub fn picker_prev(&mut self) {
        self.picker_index =
            (self.picker_index + LanguageCode::ALL.len() - 1) % LanguageCode::ALL.len();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Input hint: the follow-up question once the assistant has answered in
    /// the current language, the generic prompt otherwise.
    pub fn placeholder(&self) -> &'static str {
        let last_is_bot = self
            .conversation
            .transcript()
            .last()
            .is_some_and(|m| m.is_bot());
        match self.conversation.language() {
            Some(lang) if self.conversation.has_reply() && last_is_bot => translate_follow_up(lang),
            _ => INPUT_PLACEHOLDER,
        }
    }

    pub fn on_tick(&mut self) {
        self.status_indicator
            .set_waiting(self.conversation.pending_turns());
        self.status_indicator.update_spinner();
    }

    pub fn on_reply(&mut self, seq: u64, text: String) {
        self.conversation.complete_turn(seq, text);
        self.status_indicator
            .set_waiting(self.conversation.pending_turns());
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Submission;

    #[test]
    fn test_picker_wraps_around() {
        let mut app = App::new(Conversation::new());
        app.picker_prev();
        assert_eq!(app.picked_language(), LanguageCode::Zh);
        app.picker_next();
        app.picker_next();
        assert_eq!(app.picked_language(), LanguageCode::Es);
    }

    #[test]
    fn test_placeholder_switches_to_follow_up() {
        let mut app = App::new(Conversation::with_language(LanguageCode::Fr));
        assert_eq!(app.placeholder(), INPUT_PLACEHOLDER);

        let Submission::Dispatched(turn) = app.conversation.submit("question") else {
            panic!("expected dispatch");
        };
        assert_eq!(app.placeholder(), INPUT_PLACEHOLDER);

        app.on_reply(turn.seq(), "Merci".to_string());
        assert_eq!(app.placeholder(), "Que souhaitez-vous savoir d'autre?");

        app.conversation.change_language();
        app.conversation.submit("de");
        assert_eq!(app.placeholder(), INPUT_PLACEHOLDER);
    }

    #[test]
    fn test_placeholder_after_rejected_language() {
        let mut app = App::new(Conversation::new());
        app.conversation.submit("klingon");
        assert_eq!(app.conversation.transcript().len(), 3);
        assert_eq!(app.placeholder(), INPUT_PLACEHOLDER);
    }
}
