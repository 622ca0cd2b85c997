//! Integration tests for [`chat_session::ChatSession`] with a [`ManualClock`].
//!
//! Covers: welcome on open, reply bookkeeping, the idle warning → goodbye sequence, re-arming on
//! activity, the closed state, and reset.

use std::sync::Arc;
use std::time::Duration;

use chat_session::{ChatSession, Clock, IdleEvent, IdleState, ManualClock, SessionConfig};
use chatbot_core::{ChatError, Sender};
use chrono::{Duration as ChronoDuration, Utc};
use responder::{Responder, ScriptBook};

fn new_session() -> (ChatSession, ManualClock) {
    let clock = ManualClock::new(Utc::now());
    let config = SessionConfig {
        idle_timeout: Duration::from_secs(300),
        goodbye_delay: Duration::from_secs(60),
        rng_seed: Some(7),
        ..SessionConfig::default()
    };
    let session = ChatSession::new(
        Arc::new(Responder::default()),
        config,
        Arc::new(clock.clone()),
    );
    (session, clock)
}

/// **Test: A new session starts Active with exactly the welcome message.**
#[test]
fn test_open_appends_welcome() {
    let (session, clock) = new_session();
    assert_eq!(session.state(), IdleState::Active);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].sender, Sender::Bot);
    assert_eq!(session.history()[0].text, ScriptBook::portuguese().welcome);
    assert_eq!(session.context().last_interaction_time(), Some(clock.now()));
    assert_eq!(session.suggestions()[0].category, "initial");
}

/// **Test: send appends the user message and the reply and updates context.**
#[test]
fn test_send_appends_user_and_bot_messages() {
    let (mut session, clock) = new_session();
    clock.advance(ChronoDuration::seconds(10));

    let reply = session.send("isso está muito caro").unwrap();

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].sender, Sender::User);
    assert_eq!(history[1].text, "isso está muito caro");
    assert_eq!(history[2], reply);
    assert_eq!(reply.text, ScriptBook::portuguese().price_primary);
    assert_eq!(session.context().discount_amount(), 10);
    assert_eq!(session.context().last_interaction_time(), Some(clock.now()));
}

/// **Test: Silence produces exactly one warning, then exactly one goodbye, then nothing.**
#[test]
fn test_idle_warning_then_goodbye() {
    let (mut session, clock) = new_session();
    let scripts = ScriptBook::portuguese();

    clock.advance(ChronoDuration::seconds(299));
    assert!(session.tick().is_none());

    clock.advance(ChronoDuration::seconds(1));
    let (event, message) = session.tick().unwrap();
    assert_eq!(event, IdleEvent::Warn);
    assert_eq!(message.text, scripts.idle_warning);
    assert_eq!(session.state(), IdleState::IdleWarned);
    assert!(session.tick().is_none());

    clock.advance(ChronoDuration::seconds(59));
    assert!(session.tick().is_none());
    clock.advance(ChronoDuration::seconds(1));
    let (event, message) = session.tick().unwrap();
    assert_eq!(event, IdleEvent::Goodbye);
    assert_eq!(message.text, scripts.goodbye);
    assert!(session.is_closed());

    clock.advance(ChronoDuration::hours(3));
    assert!(session.tick().is_none());

    let automatic: Vec<_> = session
        .history()
        .iter()
        .filter(|m| m.text == scripts.idle_warning || m.text == scripts.goodbye)
        .collect();
    assert_eq!(automatic.len(), 2);
    assert_eq!(session.next_deadline(), None);
}

/// **Test: A user message after the warning re-arms the full idle window.**
#[test]
fn test_activity_after_warning_rearms() {
    let (mut session, clock) = new_session();
    clock.advance(ChronoDuration::seconds(300));
    assert_eq!(session.tick().map(|(e, _)| e), Some(IdleEvent::Warn));

    clock.advance(ChronoDuration::seconds(30));
    session.send("oi").unwrap();
    assert_eq!(session.state(), IdleState::Active);

    clock.advance(ChronoDuration::seconds(60));
    assert!(session.tick().is_none());
    assert_eq!(
        session.time_until_deadline(),
        Some(Duration::from_secs(240))
    );
}

/// **Test: A closed session rejects input until reset.**
#[test]
fn test_closed_session_rejects_and_reset_reopens() {
    let (mut session, clock) = new_session();
    let first_id = session.id().to_string();
    session.send("achei caro").unwrap();

    clock.advance(ChronoDuration::seconds(300));
    session.tick();
    clock.advance(ChronoDuration::seconds(60));
    session.tick();
    assert!(session.is_closed());
    assert!(matches!(session.send("oi"), Err(ChatError::SessionClosed)));

    session.reset();
    assert_ne!(session.id(), first_id);
    assert_eq!(session.state(), IdleState::Active);
    assert_eq!(session.history().len(), 1);
    assert!(!session.context().discount_granted());
    assert!(session.send("oi").is_ok());
}

/// **Test: Sessions with the same seed give the same replies.**
#[test]
fn test_seeded_sessions_match() {
    let (a, _) = new_session();
    let (b, _) = new_session();
    let mut a = a.with_seed(99);
    let mut b = b.with_seed(99);
    for text in ["caro", "caro", "pix", "qual o diferencial?"] {
        assert_eq!(a.send(text).unwrap().text, b.send(text).unwrap().text);
    }
}
