//! Stylesheets for the two editions

use crate::config::Edition;

const BASE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; display: flex; min-height: 100vh; font-family: 'Inter', system-ui, sans-serif; }
.sidebar { width: 280px; padding: 24px; }
.sidebar button { padding: 10px 18px; font-size: 15px; cursor: pointer; }
.chat-container { flex: 1; max-width: 1600px; margin: 0 auto; padding: 20px; }
.caption { margin-top: -8px; }
.chat-row { margin: 12px 4px; }
.chat-row.user { text-align: right; }
.meta { font-size: 12px; margin-bottom: 6px; }
.user-bubble, .ai-bubble {
    padding: 14px 18px;
    border-radius: 18px;
    display: inline-block;
    max-width: 78%;
    text-align: left;
    white-space: pre-wrap;
    word-wrap: break-word;
}
.ai-bubble pre { padding: 12px; border-radius: 8px; overflow: auto; white-space: pre; }
.composer { display: flex; gap: 8px; margin-top: 24px; }
.composer input { flex: 1; height: 48px; font-size: 16px; padding: 12px; }
.composer button { padding: 10px 18px; font-size: 15px; }
"#;

const CLASSIC: &str = r#"
body { background: linear-gradient(180deg, #f8fbff 0%, #ffffff 100%); color: #0f172a; }
.sidebar { background: #f1f5f9; }
.caption, .meta, .info { color: #64748b; }
.user-bubble {
    background: linear-gradient(90deg, #0ea5e9, #6366f1);
    color: white;
    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
}
.ai-bubble { background: #f1f5f9; color: #0f172a; box-shadow: 0 8px 24px rgba(2, 6, 23, 0.06); }
.ai-bubble pre { background: #0f172a; color: #e6eef8; }
"#;

const GLASS: &str = r#"
body { background: linear-gradient(135deg, #1e1b4b 0%, #0f766e 100%); color: #f8fafc; }
.sidebar, .chat-container {
    background: rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(16px);
    border: 1px solid rgba(255, 255, 255, 0.18);
}
.chat-container { border-radius: 24px; margin: 20px auto; }
.caption, .meta, .info { color: #cbd5e1; }
.user-bubble { background: rgba(14, 165, 233, 0.55); color: #fff; }
.ai-bubble { background: rgba(255, 255, 255, 0.16); color: #f8fafc; }
.ai-bubble pre { background: rgba(15, 23, 42, 0.75); color: #e6eef8; }
.composer input { background: rgba(255, 255, 255, 0.12); color: #fff; border: 1px solid rgba(255, 255, 255, 0.25); }
"#;

pub fn stylesheet(edition: Edition) -> String {
    let accent = match edition {
        Edition::Classic => CLASSIC,
        Edition::Glass => GLASS,
    };
    format!("{BASE}{accent}")
}
