//! Client-side transcript model for the chatbot page.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSpeaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub speaker: ChatSpeaker,
    pub text: String,
    /// Restaurant ids the assistant recommends alongside the reply.
    pub recommended_ids: Vec<String>,
    /// Marks a reply the assistant could not produce; rendered as an error
    /// bubble instead of being dropped from the transcript.
    pub failed: bool,
}

impl ChatEntry {
    pub fn from_user(text: impl Into<String>) -> Self {
        ChatEntry {
            speaker: ChatSpeaker::User,
            text: text.into(),
            recommended_ids: Vec::new(),
            failed: false,
        }
    }

    pub fn from_assistant(text: impl Into<String>, recommended_ids: Vec<String>) -> Self {
        ChatEntry {
            speaker: ChatSpeaker::Assistant,
            text: text.into(),
            recommended_ids,
            failed: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        ChatEntry {
            speaker: ChatSpeaker::Assistant,
            text: text.into(),
            recommended_ids: Vec::new(),
            failed: true,
        }
    }
}

/// One id per page visit. "New chat" clears the transcript but keeps the
/// session, so the assistant retains its conversational memory.
pub fn new_session_id() -> String {
    format!("session_{}", Uuid::new_v4())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique_and_prefixed() {
        let first = new_session_id();
        let second = new_session_id();
        assert!(first.starts_with("session_"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_failure_entries_speak_for_the_assistant() {
        let entry = ChatEntry::failure("Error: 502");
        assert_eq!(entry.speaker, ChatSpeaker::Assistant);
        assert!(entry.failed);
        assert!(entry.recommended_ids.is_empty());
    }
}
