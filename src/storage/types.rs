use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codec::iso8601;

/// A persisted chat transcript
///
/// Fields are declared in alphabetical order of their serialized names so
/// the on-disk JSON keeps sorted keys.
///
/// # Examples
///
/// ```
/// use chatshelf::storage::Chat;
///
/// let chat = Chat::new("Trip planning");
/// assert!(chat.questions.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique, immutable identifier; the only lookup key
    pub id: Uuid,

    /// Questions asked in this chat, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,

    /// When the chat happened; listings sort on this, newest first
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,

    /// Human-readable title (not unique)
    pub title: String,
}

/// A single question and its optional answer, owned by a [`Chat`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The answer, if one was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,

    /// Identifier of the question
    pub id: Uuid,

    /// The question as asked
    pub question_text: String,

    /// When the question was asked
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl Chat {
    /// Create an empty chat with a fresh id, stamped now
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions: None,
            timestamp: now_whole_seconds(),
            title: title.into(),
        }
    }

    /// Number of questions, treating an absent list as empty
    pub fn question_count(&self) -> usize {
        self.questions.as_ref().map_or(0, Vec::len)
    }
}

impl Question {
    /// Create an unanswered question with a fresh id, stamped now
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            answer_text: None,
            id: Uuid::new_v4(),
            question_text: question_text.into(),
            timestamp: now_whole_seconds(),
        }
    }

    /// Attach an answer
    pub fn with_answer(mut self, answer_text: impl Into<String>) -> Self {
        self.answer_text = Some(answer_text.into());
        self
    }
}

/// Fresh stamps carry no fraction, so they are written as `...:56Z`, a form
/// every ISO-8601 reader accepts. Explicitly set sub-second values are kept.
fn now_whole_seconds() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
