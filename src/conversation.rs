// src/conversation.rs

use crate::api::CoachingClient;
use crate::constants::WELCOME_MESSAGE;
use crate::language::LanguageCode;
use crate::models::ChatMessage;
use crate::translator::{translate_assistance, translate_error_message, PhraseTranslator};
use log::{debug, warn};
use std::collections::BTreeMap;

/// A user turn sent to the coaching endpoint and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    seq: u64,
    query: String,
    language: LanguageCode,
}

impl PendingTurn {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Language in effect when the turn was sent.
    pub fn language(&self) -> LanguageCode {
        self.language
    }
}

/// What a submission did to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ignored,
    LanguageSelected(LanguageCode),
    LanguageRejected,
    Dispatched(PendingTurn),
}

/// Chat state for one widget: transcript, language, input buffer, and
/// visibility. The transcript is append-only except for the reset that
/// accompanies a language selection.
#[derive(Debug)]
pub struct Conversation {
    transcript: Vec<ChatMessage>,
    language: Option<LanguageCode>,
    input: String,
    is_open: bool,
    next_seq: u64,
    next_to_append: u64,
    // Set once a coaching reply lands after the latest language selection.
    answered: bool,
    // Replies that arrived before an earlier turn's reply.
    completed: BTreeMap<u64, ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            language: None,
            input: String::new(),
            is_open: false,
            next_seq: 0,
            next_to_append: 0,
            answered: false,
            completed: BTreeMap::new(),
        }
    }

    /// Starts with a language already chosen, skipping the picker.
    pub fn with_language(language: LanguageCode) -> Self {
        let mut conversation = Self::new();
        conversation.select_language(language);
        conversation
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn language(&self) -> Option<LanguageCode> {
        self.language
    }

    pub fn is_awaiting_language(&self) -> bool {
        self.language.is_none()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn pending_turns(&self) -> u64 {
        self.next_seq - self.next_to_append
    }

    /// Whether a coaching reply has been appended since the language was
    /// last selected.
    pub fn has_reply(&self) -> bool {
        self.answered
    }

    /// Picker button path. Resets the transcript to the welcome message plus
    /// the acknowledgment in the chosen language.
    pub fn select_language(&mut self, language: LanguageCode) {
        let welcome = self
            .transcript
            .first()
            .cloned()
            .unwrap_or_else(|| ChatMessage::bot(WELCOME_MESSAGE));
        let ack = format!("{} selected. {}", language.name(), translate_assistance(language));

        self.language = Some(language);
        self.transcript = vec![welcome, ChatMessage::bot(ack)];
        self.answered = false;
        debug!("Language set to '{}'", language);
    }

    /// Forgets the language; the transcript is kept.
    pub fn change_language(&mut self) {
        self.language = None;
    }

    /// Submits whatever is in the input buffer and clears it.
    pub fn submit_input(&mut self) -> Submission {
        let text = std::mem::take(&mut self.input);
        self.submit(&text)
    }

    pub fn submit(&mut self, text: &str) -> Submission {
        if text.trim().is_empty() {
            return Submission::Ignored;
        }

        let Some(language) = self.language else {
            return match text.parse::<LanguageCode>() {
                Ok(language) => {
                    self.select_language(language);
                    Submission::LanguageSelected(language)
                }
                Err(e) => {
                    debug!("{}", e);
                    self.transcript.push(ChatMessage::user(text));
                    self.transcript.push(ChatMessage::bot(format!(
                        "Sorry, I don't know that language. Please choose one of: {}.",
                        LanguageCode::supported_names()
                    )));
                    Submission::LanguageRejected
                }
            };
        };

        self.transcript.push(ChatMessage::user(text));

        let turn = PendingTurn {
            seq: self.next_seq,
            query: text.to_string(),
            language,
        };
        self.next_seq += 1;
        debug!("Dispatching turn {} in '{}'", turn.seq, language);

        Submission::Dispatched(turn)
    }

    /// Delivers the bot reply for a dispatched turn. Replies are appended in
    /// the order their turns were sent, whatever order they arrive in.
    pub fn complete_turn(&mut self, seq: u64, reply: impl Into<String>) {
        if seq < self.next_to_append || seq >= self.next_seq {
            warn!("Ignoring reply for unknown turn {}", seq);
            return;
        }

        self.completed.insert(seq, ChatMessage::bot(reply));
        while let Some(message) = self.completed.remove(&self.next_to_append) {
            self.transcript.push(message);
            self.next_to_append += 1;
            self.answered = true;
        }
    }
}

/// Produces the bot text for a turn: the coaching reply translated into the
/// turn's language, or the canned apology when the call fails.
pub async fn resolve_reply(
    client: &CoachingClient,
    translator: &PhraseTranslator,
    turn: &PendingTurn,
) -> String {
    match client.ask(turn.query()).await {
        Ok(response) => translator.translate(&response, turn.language()).await,
        Err(e) => {
            warn!("Coaching request for turn {} failed: {}", turn.seq(), e);
            translate_error_message(turn.language()).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn translator() -> PhraseTranslator {
        PhraseTranslator::new(Duration::ZERO).unwrap()
    }

    fn dispatched(submission: Submission) -> PendingTurn {
        match submission {
            Submission::Dispatched(turn) => turn,
            other => panic!("expected a dispatched turn, got {:?}", other),
        }
    }

    #[test]
    fn test_fresh_conversation() {
        let conversation = Conversation::new();
        assert_eq!(conversation.transcript(), &[ChatMessage::bot(WELCOME_MESSAGE)]);
        assert_eq!(conversation.language(), None);
        assert!(!conversation.is_open());
    }

    #[test]
    fn test_typed_language_selection() {
        let mut conversation = Conversation::new();
        let submission = conversation.submit("fr");

        assert_eq!(submission, Submission::LanguageSelected(LanguageCode::Fr));
        assert_eq!(conversation.language(), Some(LanguageCode::Fr));
        let transcript = conversation.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0], ChatMessage::bot(WELCOME_MESSAGE));
        assert_eq!(
            transcript[1],
            ChatMessage::bot("French selected. Comment puis-je vous aider davantage?")
        );
    }

    #[test]
    fn test_language_selection_by_name() {
        let mut conversation = Conversation::new();
        conversation.submit("  Chinese ");
        assert_eq!(conversation.language(), Some(LanguageCode::Zh));
        assert!(conversation.transcript()[1].text().starts_with("Chinese selected."));
    }

    #[test]
    fn test_unknown_language_keeps_waiting() {
        let mut conversation = Conversation::new();
        let submission = conversation.submit("klingon");

        assert_eq!(submission, Submission::LanguageRejected);
        assert!(conversation.is_awaiting_language());
        let transcript = conversation.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1], ChatMessage::user("klingon"));
        assert!(transcript[2].text().contains("English, Spanish, French"));
    }

    #[test]
    fn test_whitespace_submission_is_ignored() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.submit("   \n\t"), Submission::Ignored);
        assert_eq!(conversation.transcript().len(), 1);

        conversation.select_language(LanguageCode::Es);
        assert_eq!(conversation.submit(" "), Submission::Ignored);
        assert_eq!(conversation.transcript().len(), 2);
    }

    #[test]
    fn test_change_language_keeps_transcript() {
        let mut conversation = Conversation::with_language(LanguageCode::Es);
        let turn = dispatched(conversation.submit("test"));
        conversation.complete_turn(turn.seq(), "ok");
        assert_eq!(conversation.transcript().len(), 4);

        conversation.change_language();
        assert!(conversation.is_awaiting_language());
        assert_eq!(conversation.transcript().len(), 4);

        conversation.submit("de");
        assert_eq!(conversation.language(), Some(LanguageCode::De));
        assert_eq!(conversation.transcript().len(), 2);
    }

    #[test]
    fn test_toggle_does_not_touch_state() {
        let mut conversation = Conversation::with_language(LanguageCode::Hi);
        conversation.toggle_open();
        assert!(conversation.is_open());
        conversation.toggle_open();
        assert!(!conversation.is_open());
        assert_eq!(conversation.language(), Some(LanguageCode::Hi));
        assert_eq!(conversation.transcript().len(), 2);
    }

    #[test]
    fn test_submit_input_drains_buffer() {
        let mut conversation = Conversation::new();
        for c in "es".chars() {
            conversation.push_input(c);
        }
        conversation.push_input('x');
        conversation.pop_input();

        assert_eq!(
            conversation.submit_input(),
            Submission::LanguageSelected(LanguageCode::Es)
        );
        assert_eq!(conversation.input(), "");
    }

    #[test]
    fn test_replies_are_appended_in_send_order() {
        let mut conversation = Conversation::with_language(LanguageCode::En);
        let first = dispatched(conversation.submit("one"));
        let second = dispatched(conversation.submit("two"));
        assert_eq!(conversation.pending_turns(), 2);

        conversation.complete_turn(second.seq(), "reply two");
        assert_eq!(conversation.transcript().len(), 4);

        conversation.complete_turn(first.seq(), "reply one");
        let texts: Vec<&str> = conversation.transcript()[2..]
            .iter()
            .map(|m| m.text())
            .collect();
        assert_eq!(texts, vec!["one", "two", "reply one", "reply two"]);
        assert_eq!(conversation.pending_turns(), 0);
    }

    #[test]
    fn test_has_reply_tracks_completed_turns() {
        let mut conversation = Conversation::new();
        conversation.submit("klingon");
        assert!(!conversation.has_reply());

        conversation.submit("en");
        let turn = dispatched(conversation.submit("one"));
        assert!(!conversation.has_reply());
        conversation.complete_turn(turn.seq(), "reply");
        assert!(conversation.has_reply());

        conversation.change_language();
        conversation.submit("es");
        assert!(!conversation.has_reply());
    }

    #[test]
    fn test_unknown_or_repeated_reply_is_ignored() {
        let mut conversation = Conversation::with_language(LanguageCode::En);
        let turn = dispatched(conversation.submit("one"));
        conversation.complete_turn(turn.seq(), "reply");
        conversation.complete_turn(turn.seq(), "again");
        conversation.complete_turn(42, "stray");
        assert_eq!(conversation.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_spanish_reply_is_translated() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dietary-coaching"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Here are some suggestions for you"
            })))
            .mount(&mock_server)
            .await;
        let client = CoachingClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();

        let mut conversation = Conversation::with_language(LanguageCode::Es);
        let turn = dispatched(conversation.submit("test"));

        let last = conversation.transcript().last().unwrap();
        assert_eq!(last, &ChatMessage::user("test"));
        assert_eq!(last.sender(), Sender::User);

        let reply = resolve_reply(&client, &translator(), &turn).await;
        conversation.complete_turn(turn.seq(), reply);

        assert_eq!(
            conversation.transcript().last().unwrap(),
            &ChatMessage::bot("Aquí hay algunas sugerencias for you")
        );
    }

    #[tokio::test]
    async fn test_failed_call_uses_canned_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dietary-coaching"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;
        let client = CoachingClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();

        let mut conversation = Conversation::with_language(LanguageCode::De);
        let turn = dispatched(conversation.submit("test"));
        let reply = resolve_reply(&client, &translator(), &turn).await;
        conversation.complete_turn(turn.seq(), reply);

        assert_eq!(
            conversation.transcript().last().unwrap().text(),
            "Entschuldigung, ich konnte keine Antwort abrufen."
        );
    }

    #[tokio::test]
    async fn test_turn_keeps_language_it_was_sent_in() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dietary-coaching"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "Thanks" })),
            )
            .mount(&mock_server)
            .await;
        let client = CoachingClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();

        let mut conversation = Conversation::with_language(LanguageCode::Fr);
        let turn = dispatched(conversation.submit("merci?"));
        conversation.change_language();

        let reply = resolve_reply(&client, &translator(), &turn).await;
        conversation.complete_turn(turn.seq(), reply);
        assert_eq!(conversation.transcript().last().unwrap().text(), "Merci");
    }
}
