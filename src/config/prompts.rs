//! Built-in system prompts and page copy for each edition
//!
//! The system prompt heads every conversation but is never shown in the
//! transcript. It is kept so the history has the same shape a model-backed
//! assistant would use.

use super::Edition;

/// Default system prompt for the classic edition
pub const CLASSIC: &str =
    "You are an intelligent offline AI assistant that gives helpful and creative answers.";

/// Default system prompt for the glass edition
pub const GLASS: &str = "You are a calm, encouraging offline AI assistant with a glass-like clarity. Give helpful, creative and motivating answers.";

/// Copy shown around the chat for one edition
#[derive(Debug, Clone, Copy)]
pub struct PageCopy {
    pub title: &'static str,
    pub heading: &'static str,
    pub caption: &'static str,
    pub info: &'static str,
}

pub fn system_prompt(edition: Edition) -> &'static str {
    match edition {
        Edition::Classic => CLASSIC,
        Edition::Glass => GLASS,
    }
}

pub fn page_copy(edition: Edition) -> PageCopy {
    match edition {
        Edition::Classic => PageCopy {
            title: "AI Chat Assistant (Offline)",
            heading: "🤖 AI Chat Assistant (Offline Mode)",
            caption: "Fully working ChatGPT-style chatbot — no API key required!",
            info: "This is an offline ChatGPT-style chatbot. No API key needed — responses are simulated for demos and prototypes.",
        },
        Edition::Glass => PageCopy {
            title: "Glass AI Assistant (Offline)",
            heading: "🔮 Glass AI Assistant",
            caption: "A frosted-glass chat demo with offline, simulated answers.",
            info: "Glass edition of the offline chatbot. Ask for a quote when you need a little motivation.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_edition_has_its_own_prompt() {
        assert_eq!(system_prompt(Edition::Classic), CLASSIC);
        assert_eq!(system_prompt(Edition::Glass), GLASS);
        assert_ne!(page_copy(Edition::Classic).title, page_copy(Edition::Glass).title);
    }
}
