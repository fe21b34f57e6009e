// API Constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";
pub const DIETARY_COACHING_PATH: &str = "/api/dietary-coaching";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Translation Constants
pub const DEFAULT_TRANSLATION_DELAY_MS: u64 = 300;

// Conversation Constants
pub const WELCOME_MESSAGE: &str = "Hi! How can I assist you today?\nPlease select your language:";

// UI Constants
pub const WIDGET_TITLE: &str = "Raseed AI Assistant";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";
pub const CHANGE_LANGUAGE_LABEL: &str = "Change Language";
pub const BOT_AVATAR: &str = "👨‍💼";
pub const USER_AVATAR: &str = "👤";
pub const CLOSED_ICON: &str = "💬";
