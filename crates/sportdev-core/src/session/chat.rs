//! The conversational coaching session.
//!
//! An append-only log of chat turns plus a two-state machine guarding the
//! single outstanding request. The turn sequence is the entire conversational
//! state; it lives in memory for the lifetime of the session and every
//! outbound call carries the full prior sequence in original order.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::error::Fault;
use crate::services::{CoachingService, Role, TurnPayload};

/// Seeded first model turn.
pub const COACH_GREETING: &str =
    "Hi! I'm your SportDev AI Coach. How can I help you reach your goals today?";

/// Appended in place of a reply when the service faults.
pub const COACH_FALLBACK: &str = "Sorry, I'm having trouble connecting to my brain right now.";

/// Appended when the service succeeds but returns empty text.
pub const EMPTY_REPLY: &str = "No response";

/// One message in the exchange, tagged by speaker.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Session state: either free to send, or holding exactly one open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
}

/// An accepted outbound request: the trimmed message plus the prior turn
/// sequence projected to wire payloads (timestamps stripped).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<TurnPayload>,
}

/// Chat session state machine.
pub struct ChatSession {
    turns: RefCell<Vec<ChatTurn>>,
    state: Cell<ChatState>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Start a session seeded with the coach's greeting.
    pub fn new() -> Self {
        Self {
            turns: RefCell::new(vec![ChatTurn::now(Role::Model, COACH_GREETING)]),
            state: Cell::new(ChatState::Idle),
        }
    }

    /// Snapshot of the turn log, oldest first.
    pub fn turns(&self) -> Vec<ChatTurn> {
        self.turns.borrow().clone()
    }

    pub fn state(&self) -> ChatState {
        self.state.get()
    }

    pub fn is_awaiting(&self) -> bool {
        self.state.get() == ChatState::AwaitingResponse
    }

    /// Accept a user message for sending.
    ///
    /// Returns `None` (and changes nothing) when the text is blank or a
    /// request is already outstanding. Otherwise appends the user turn,
    /// transitions to `AwaitingResponse`, and returns the request to put on
    /// the wire: the message plus every turn that preceded it.
    pub fn begin(&self, text: &str) -> Option<ChatRequest> {
        let message = text.trim();
        if message.is_empty() || self.is_awaiting() {
            return None;
        }

        let history: Vec<TurnPayload> = self
            .turns
            .borrow()
            .iter()
            .map(|turn| TurnPayload {
                role: turn.role,
                text: turn.text.clone(),
            })
            .collect();

        self.turns
            .borrow_mut()
            .push(ChatTurn::now(Role::User, message));
        self.state.set(ChatState::AwaitingResponse);

        Some(ChatRequest {
            message: message.to_string(),
            history,
        })
    }

    /// Record the outcome of the outstanding request and return to `Idle`.
    ///
    /// A fault degrades to the fixed apology turn; an empty reply degrades to
    /// the fixed no-response text. Either way the session is immediately
    /// usable again.
    pub fn resolve(&self, outcome: Result<String, Fault>) {
        let text = match outcome {
            Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(_) => COACH_FALLBACK.to_string(),
        };
        self.turns.borrow_mut().push(ChatTurn::now(Role::Model, text));
        self.state.set(ChatState::Idle);
    }

    /// Send a message through the coaching service.
    ///
    /// Blank input and duplicate concurrent sends are no-ops. Service faults
    /// never escape: they become the apology turn.
    pub async fn send(&self, text: &str, coach: &dyn CoachingService) {
        let Some(request) = self.begin(text) else {
            return;
        };
        let outcome = coach.chat(&request.message, &request.history).await;
        self.resolve(outcome);
    }
}
