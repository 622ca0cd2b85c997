//! A single chat session: welcome, replies, idle warning, goodbye.

use std::sync::Arc;

use chatbot_core::{ChatError, ConversationContext, Message, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use responder::{Responder, Suggestion};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::idle::{IdleEvent, IdleMonitor, IdleState};

/// Owns everything one chat widget lifetime needs. Nothing here is shared with other sessions
/// except the immutable responder.
pub struct ChatSession {
    id: String,
    responder: Arc<Responder>,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
    config: SessionConfig,
    context: ConversationContext,
    history: Vec<Message>,
    idle: IdleMonitor,
}

impl ChatSession {
    /// Opens a session: appends the welcome message and arms the idle timer.
    /// Replies are seeded from `config.rng_seed` when set.
    pub fn new(responder: Arc<Responder>, config: SessionConfig, clock: Arc<dyn Clock>) -> Self {
        let rng: Box<dyn RngCore + Send> = match config.rng_seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        let now = clock.now();
        let idle = IdleMonitor::new(config.idle_timeout, config.goodbye_delay, now);
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            responder,
            clock,
            rng,
            config,
            context: ConversationContext::new(),
            history: Vec::new(),
            idle,
        };
        session.open();
        session
    }

    /// Replaces the random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Box::new(StdRng::seed_from_u64(seed));
        self
    }

    fn open(&mut self) {
        let welcome = self.responder.scripts().welcome;
        self.push_bot(welcome);
        info!(session_id = %self.id, "step: session opened");
    }

    fn push_bot(&mut self, text: &str) -> Message {
        let now = self.clock.now();
        let message = Message::bot(text, now);
        self.history.push(message.clone());
        self.context.touch(now);
        self.idle.record_activity(now);
        message
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn state(&self) -> IdleState {
        self.idle.state()
    }

    pub fn is_closed(&self) -> bool {
        self.idle.is_closed()
    }

    /// When the next idle transition is due.
    pub fn next_deadline(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.idle.deadline()
    }

    /// Time left until the next idle transition; zero when already due.
    pub fn time_until_deadline(&self) -> Option<std::time::Duration> {
        let deadline = self.idle.deadline()?;
        Some((deadline - self.clock.now()).to_std().unwrap_or_default())
    }

    /// Handles one user utterance and returns the bot reply (already appended to the history).
    #[instrument(skip(self, utterance), fields(session_id = %self.id))]
    pub fn send(&mut self, utterance: &str) -> Result<Message> {
        if self.is_closed() {
            return Err(ChatError::SessionClosed);
        }
        let now = self.clock.now();
        self.idle.record_activity(now);

        let reply = self
            .responder
            .respond(&self.context, &self.history, utterance, self.rng.as_mut());
        self.history.push(Message::user(utterance, now));
        self.context = reply.context;

        info!(
            rule = reply.rule.unwrap_or("default"),
            discount = self.context.discount_amount(),
            history_len = self.history.len(),
            "step: reply ready"
        );
        Ok(self.push_bot(&reply.text))
    }

    /// Checks the idle timer. Appends and returns the warning or goodbye when one is due.
    pub fn tick(&mut self) -> Option<(IdleEvent, Message)> {
        let event = self.idle.poll(self.clock.now())?;
        let text = match event {
            IdleEvent::Warn => self.responder.scripts().idle_warning,
            IdleEvent::Goodbye => self.responder.scripts().goodbye,
        };
        let now = self.clock.now();
        let message = Message::bot(text, now);
        self.history.push(message.clone());
        // not push_bot: recording activity here would undo the IdleWarned state
        self.context.touch(now);
        info!(session_id = %self.id, event = ?event, "step: idle event");
        Some((event, message))
    }

    /// Quick-reply chips for the current state.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.responder.suggestions(&self.history, &self.context)
    }

    /// Starts over: new id, fresh context and history, timers re-armed, welcome again.
    pub fn reset(&mut self) {
        info!(session_id = %self.id, "step: session reset");
        self.id = Uuid::new_v4().to_string();
        self.context = ConversationContext::new();
        self.history.clear();
        self.idle = IdleMonitor::new(
            self.config.idle_timeout,
            self.config.goodbye_delay,
            self.clock.now(),
        );
        self.open();
    }
}
