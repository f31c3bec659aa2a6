use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: Local::now(),
        }
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: Local::now(),
        }
    }
}
