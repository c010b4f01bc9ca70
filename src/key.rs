//! Cache-Key Derivation Module
//!
//! Canonicalizes a chat request (new prompt plus ordered conversation
//! history) into a stable string key for cache lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Delimiter ==
/// Separator between serialized history turns.
///
/// Content is not escaped: a turn whose text contains `|` or `:` can in
/// principle collide with a differently-shaped history. This mirrors the
/// literal string matching the rest of the core relies on and is a known
/// limitation, not something the key derivation tries to repair.
pub const TURN_DELIMITER: char = '|';

// == Chat Role ==
/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System prompt / instructions
    System,
    /// End-user message
    User,
    /// Model response
    Assistant,
}

impl ChatRole {
    /// Wire-format name of the role, as used in the derived key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Chat Turn ==
/// A single (role, content) pair in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Convenience constructor for a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Convenience constructor for an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

// == Derive Key ==
/// Derives a deterministic cache key from a prompt and its history.
///
/// Each history turn is rendered as `role:content`, turns are joined with
/// [`TURN_DELIMITER`], and the new prompt is appended as a final `user` turn.
/// Order of the history is significant and preserved. No normalization is
/// applied: prompts differing only in whitespace or casing produce different
/// keys and therefore separate cache entries.
pub fn derive_key(prompt: &str, history: &[ChatTurn]) -> String {
    let mut key = String::with_capacity(
        prompt.len() + history.iter().map(|t| t.content.len() + 12).sum::<usize>() + 8,
    );

    for turn in history {
        key.push_str(turn.role.as_str());
        key.push(':');
        key.push_str(&turn.content);
        key.push(TURN_DELIMITER);
    }

    // The outgoing prompt is always a user turn.
    key.push_str(ChatRole::User.as_str());
    key.push(':');
    key.push_str(prompt);

    key
}
