//! A single chat session: one conversation plus the selector that answers it

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::Edition;
use crate::conversation::{Conversation, Message, Role};

use super::selector::ResponseSelector;

/// The two messages added by one user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: Message,
    pub assistant: Message,
}

/// Owns the conversation and the random source for one user.
pub struct ChatSession<R = StdRng> {
    conversation: Conversation,
    selector: ResponseSelector,
    rng: R,
}

impl ChatSession<StdRng> {
    pub fn new(edition: Edition, system_prompt: impl Into<String>) -> Self {
        Self::with_rng(edition, system_prompt, StdRng::from_entropy())
    }
}

impl<R: Rng> ChatSession<R> {
    /// Create a session that draws replies from the given generator
    pub fn with_rng(edition: Edition, system_prompt: impl Into<String>, rng: R) -> Self {
        Self {
            conversation: Conversation::new(system_prompt),
            selector: ResponseSelector::new(edition),
            rng,
        }
    }

    /// Record the user's input, answer it, and return both new messages.
    pub fn submit(&mut self, input: &str) -> Exchange {
        let user = self.conversation.append(Role::User, input).clone();
        let reply = self.selector.select(input, &mut self.rng);
        let assistant = self.conversation.append(Role::Assistant, reply).clone();

        Exchange { user, assistant }
    }

    /// Drop the history back to the system message.
    pub fn clear(&mut self) {
        self.conversation.reset();
        debug_assert!(!self.conversation.is_empty());
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}
