//! Plain-text rendering of bot output for the terminal.

use chat_session::{SessionEvent, SessionEventKind};
use responder::Suggestion;

/// One line of numbered chips, or an empty string when there are none.
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let chips: Vec<String> = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("[{}] {}", i + 1, s.text))
        .collect();
    format!("  {}", chips.join("  "))
}

pub fn render_event(event: &SessionEvent) -> String {
    let mut out = format!("bot> {}", event.message.text.replace('\n', "\n     "));
    let chips = render_suggestions(&event.suggestions);
    if !chips.is_empty() {
        out.push('\n');
        out.push_str(&chips);
    }
    if event.kind == SessionEventKind::Goodbye {
        out.push_str("\n(conversa encerrada: /reset para recomeçar, /sair para sair)");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_core::Message;
    use chrono::Utc;

    fn chip(text: &str) -> Suggestion {
        Suggestion {
            id: "pricing-1".to_string(),
            text: text.to_string(),
            category: "pricing".to_string(),
        }
    }

    #[test]
    fn test_render_reply_with_chips() {
        let event = SessionEvent {
            kind: SessionEventKind::Reply,
            message: Message::bot("linha 1\nlinha 2", Utc::now()),
            suggestions: vec![chip("Aceita PIX?"), chip("Posso parcelar?")],
        };
        assert_eq!(
            render_event(&event),
            "bot> linha 1\n     linha 2\n  [1] Aceita PIX?  [2] Posso parcelar?"
        );
    }

    #[test]
    fn test_render_goodbye_adds_hint() {
        let event = SessionEvent {
            kind: SessionEventKind::Goodbye,
            message: Message::bot("Até logo!", Utc::now()),
            suggestions: Vec::new(),
        };
        let out = render_event(&event);
        assert!(out.starts_with("bot> Até logo!\n"));
        assert!(out.contains("/reset"));
    }

    #[test]
    fn test_no_chips_renders_empty() {
        assert_eq!(render_suggestions(&[]), "");
    }
}
