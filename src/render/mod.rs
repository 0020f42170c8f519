//! Server-side HTML for the chat page
//!
//! User text is always escaped. Assistant text is escaped too, but fenced
//! code blocks in it become `<pre><code>` so the canned snippets keep their
//! formatting.

mod theme;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::config::prompts::page_copy;
use crate::config::Edition;
use crate::conversation::{Message, Role};

const FENCE: &str = "```";

/// Escape text for safe inclusion in HTML content and attributes.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render assistant text: fenced blocks become code blocks, everything
/// else is escaped prose.
pub fn format_assistant(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let Some(close) = after_open.find(FENCE) else {
            break;
        };

        out.push_str(&html_escape(&rest[..open]));

        let block = &after_open[..close];
        let (lang, code) = match block.split_once('\n') {
            Some((lang, code)) => (lang.trim(), code),
            None => ("", block),
        };
        let code = code.strip_suffix('\n').unwrap_or(code);

        if lang.is_empty() {
            out.push_str("<pre><code>");
        } else {
            out.push_str(&format!(
                "<pre><code class=\"language-{}\">",
                html_escape(lang)
            ));
        }
        out.push_str(&html_escape(code));
        out.push_str("</code></pre>");

        rest = &after_open[close + FENCE.len()..];
    }

    out.push_str(&html_escape(rest));
    out
}

/// One chat bubble with its meta line. System messages render as nothing.
pub fn render_message(message: &Message, at: DateTime<Local>) -> String {
    let timestamp = at.format("%H:%M:%S");
    match message.role {
        Role::System => String::new(),
        Role::User => format!(
            "<div class=\"chat-row user\"><div class=\"meta\">You • {timestamp}</div>\
             <div class=\"user-bubble\">{}</div></div>\n",
            html_escape(&message.content)
        ),
        Role::Assistant => format!(
            "<div class=\"chat-row ai\"><div class=\"meta\">AI • {timestamp}</div>\
             <div class=\"ai-bubble\">{}</div></div>\n",
            format_assistant(&message.content)
        ),
    }
}

/// The full chat page for one session
pub fn render_page<'a>(
    edition: Edition,
    session_id: Uuid,
    messages: impl IntoIterator<Item = &'a Message>,
    at: DateTime<Local>,
) -> String {
    let copy = page_copy(edition);
    let transcript: String = messages
        .into_iter()
        .map(|m| render_message(m, at))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body class="{edition}">
<aside class="sidebar">
  <h2>⚙️ Chat Settings</h2>
  <form method="post" action="/chat/{id}/clear"><button type="submit">Clear Chat</button></form>
  <hr>
  <p><strong>App Info</strong></p>
  <p class="info">{info}</p>
</aside>
<main class="chat-container">
  <h1>{heading}</h1>
  <p class="caption">{caption}</p>
  <section class="transcript">
{transcript}  </section>
  <form class="composer" method="post" action="/chat/{id}">
    <input type="text" name="message" placeholder="Type something..." autofocus autocomplete="off">
    <button type="submit">Send</button>
  </form>
</main>
</body>
</html>
"#,
        title = html_escape(copy.title),
        css = theme::stylesheet(edition),
        edition = edition,
        id = session_id,
        info = html_escape(copy.info),
        heading = html_escape(copy.heading),
        caption = html_escape(copy.caption),
        transcript = transcript,
    )
}

/// Minimal page for unknown sessions
pub fn render_not_found(session_id: Uuid) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Not found</title></head>\
         <body><p>Chat session {session_id} does not exist or has ended.</p>\
         <p><a href=\"/\">Start a new chat</a></p></body></html>\n"
    )
}
