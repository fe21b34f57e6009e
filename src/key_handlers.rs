use crate::app::App;
use crate::conversation::{PendingTurn, Submission};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

/// What the event loop must do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Dispatch(PendingTurn),
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return KeyAction::Quit;
    }

    if !app.conversation.is_open() {
        return handle_closed_input(app, key);
    }

    match key.code {
        KeyCode::Esc => app.conversation.toggle_open(),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.conversation.is_awaiting_language() {
                app.conversation.change_language();
            }
        }
        KeyCode::Enter => return handle_enter(app),
        KeyCode::Left if app.conversation.is_awaiting_language() => app.picker_prev(),
        KeyCode::Right | KeyCode::Tab if app.conversation.is_awaiting_language() => {
            app.picker_next()
        }
        KeyCode::Backspace => app.conversation.pop_input(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.conversation.push_input(c)
        }
        _ => {}
    }

    KeyAction::None
}

fn handle_closed_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            KeyAction::Quit
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') => {
            app.conversation.toggle_open();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_enter(app: &mut App) -> KeyAction {
    // An empty input while choosing a language presses the highlighted button.
    if app.conversation.is_awaiting_language() && app.conversation.input().is_empty() {
        let language = app.picked_language();
        app.conversation.select_language(language);
        return KeyAction::None;
    }

    match app.conversation.submit_input() {
        Submission::Dispatched(turn) => {
            app.scroll = 0;
            app.status_indicator
                .set_waiting(app.conversation.pending_turns());
            KeyAction::Dispatch(turn)
        }
        other => {
            debug!("Submission handled locally: {:?}", other);
            KeyAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Conversation;
    use crate::language::LanguageCode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn open_app(conversation: Conversation) -> App {
        let mut app = App::new(conversation);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.conversation.is_open());
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_closed_widget_ignores_typing() {
        let mut app = App::new(Conversation::new());
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.conversation.input(), "");
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_picker_button_selects_language() {
        let mut app = open_app(Conversation::new());
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), KeyAction::None);
        assert_eq!(app.conversation.language(), Some(LanguageCode::Fr));
    }

    #[test]
    fn test_blank_input_does_not_press_picker() {
        let mut app = open_app(Conversation::new());
        type_text(&mut app, "  ");

        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), KeyAction::None);
        assert_eq!(app.conversation.language(), None);
        assert_eq!(app.conversation.transcript().len(), 1);
        assert_eq!(app.conversation.input(), "");
    }

    #[test]
    fn test_typed_message_is_dispatched() {
        let mut app = open_app(Conversation::with_language(LanguageCode::Es));
        type_text(&mut app, "test");

        match handle_key(&mut app, press(KeyCode::Enter)) {
            KeyAction::Dispatch(turn) => {
                assert_eq!(turn.query(), "test");
                assert_eq!(turn.language(), LanguageCode::Es);
            }
            other => panic!("expected dispatch, got {:?}", other),
        }
        assert!(app.status_indicator.is_waiting());
    }

    #[test]
    fn test_change_language_shortcut() {
        let mut app = open_app(Conversation::with_language(LanguageCode::De));
        handle_key(&mut app, ctrl('l'));
        assert!(app.conversation.is_awaiting_language());
        assert_eq!(app.conversation.transcript().len(), 2);
    }

    #[test]
    fn test_escape_closes_without_touching_state() {
        let mut app = open_app(Conversation::with_language(LanguageCode::Hi));
        type_text(&mut app, "dal");
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.conversation.is_open());
        assert_eq!(app.conversation.input(), "dal");
        assert_eq!(app.conversation.language(), Some(LanguageCode::Hi));
    }
}
