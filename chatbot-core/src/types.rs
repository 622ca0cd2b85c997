//! Chat messages exchanged in one session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable once created; history only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            created_at,
        }
    }

    pub fn user(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(Sender::User, text, created_at)
    }

    pub fn bot(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(Sender::Bot, text, created_at)
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
