//! Conversation types and state management

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Ordered message history for one chat session.
///
/// Always starts with exactly one system message. The only mutations are
/// [`Conversation::append`] and [`Conversation::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    system_prompt: String,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        Self {
            messages: vec![Message::new(Role::System, system_prompt.clone())],
            system_prompt,
        }
    }

    /// Append a message and return a reference to it.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Message {
        self.messages.push(Message::new(role, content));
        &self.messages[self.messages.len() - 1]
    }

    /// Replace the whole history with a fresh system message.
    pub fn reset(&mut self) {
        self.messages = vec![Message::new(Role::System, self.system_prompt.clone())];
    }

    /// Messages meant for display, i.e. everything except system messages.
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true in practice: the system message is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_single_system_message() {
        let conversation = Conversation::new("be nice");
        assert_eq!(conversation.len(), 1);
        assert!(!conversation.is_empty());
        assert_eq!(conversation.messages()[0], Message::new(Role::System, "be nice"));
        assert_eq!(conversation.visible_messages().count(), 0);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut conversation = Conversation::new("sys");
        conversation.append(Role::User, "one");
        conversation.append(Role::Assistant, "two");
        conversation.append(Role::User, "three");

        let contents: Vec<&str> = conversation
            .visible_messages()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_visible_messages_never_yields_system() {
        let mut conversation = Conversation::new("sys");
        for i in 0..10 {
            conversation.append(Role::User, format!("q{i}"));
            conversation.append(Role::Assistant, format!("a{i}"));
        }
        conversation.append(Role::System, "late system note");

        assert!(conversation.visible_messages().all(|m| m.role != Role::System));
        assert_eq!(conversation.visible_messages().count(), 20);
        // Restartable: a second pass sees the same items.
        assert_eq!(conversation.visible_messages().count(), 20);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut conversation = Conversation::new("sys");
        conversation.append(Role::User, "hello");
        conversation.append(Role::Assistant, "hi");

        conversation.reset();
        let first = conversation.clone();
        conversation.reset();

        assert_eq!(conversation, first);
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::System);
        assert_eq!(conversation.messages()[0].content, "sys");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::new(Role::Assistant, "x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }
}
