//! # chat-session
//!
//! One chat widget session: owns the [`ConversationContext`](chatbot_core::ConversationContext),
//! the append-only message history, an injected RNG and an injected [`Clock`]. Idle handling is an
//! explicit state machine ([`IdleMonitor`]) so tests can advance virtual time; [`drive`] runs a
//! session on tokio with inbound/outbound channels.

pub mod clock;
pub mod config;
pub mod driver;
pub mod idle;
pub mod session;

pub use clock::{Clock, ManualClock, TokioClock};
pub use config::SessionConfig;
pub use driver::{drive, SessionEvent, SessionEventKind};
pub use idle::{IdleEvent, IdleMonitor, IdleState};
pub use session::ChatSession;
