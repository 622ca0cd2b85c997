//! Runs a [`ChatSession`] on tokio: inbound utterances and the idle deadline race in one
//! `select!`, so every message re-arms the timer and at most one timer is ever pending.

use chatbot_core::{Message, Result};
use responder::Suggestion;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::idle::IdleEvent;
use crate::session::ChatSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    Reply,
    IdleWarning,
    Goodbye,
}

impl From<IdleEvent> for SessionEventKind {
    fn from(event: IdleEvent) -> Self {
        match event {
            IdleEvent::Warn => SessionEventKind::IdleWarning,
            IdleEvent::Goodbye => SessionEventKind::Goodbye,
        }
    }
}

/// A bot message produced by the session, with the chips to show next to it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    pub message: Message,
    pub suggestions: Vec<Suggestion>,
}

/// Drives `session` until it closes by inactivity, the inbound channel ends, or the receiver of
/// `outbound` goes away. Returns the session so the caller can inspect or reset it.
#[instrument(skip_all, fields(session_id = %session.id()))]
pub async fn drive(
    mut session: ChatSession,
    mut inbound: mpsc::Receiver<String>,
    outbound: mpsc::Sender<SessionEvent>,
) -> Result<ChatSession> {
    info!("step: session driver started");

    while !session.is_closed() {
        let wait = session.time_until_deadline();

        let event = tokio::select! {
            received = inbound.recv() => {
                let Some(text) = received else {
                    debug!("inbound channel closed");
                    break;
                };
                let message = session.send(&text)?;
                SessionEvent {
                    kind: SessionEventKind::Reply,
                    message,
                    suggestions: session.suggestions(),
                }
            }
            _ = tokio::time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                match session.tick() {
                    Some((idle_event, message)) => SessionEvent {
                        kind: idle_event.into(),
                        message,
                        suggestions: Vec::new(),
                    },
                    None => continue,
                }
            }
        };

        if outbound.send(event).await.is_err() {
            debug!("outbound receiver dropped");
            break;
        }
    }

    info!(closed = session.is_closed(), "step: session driver finished");
    Ok(session)
}
