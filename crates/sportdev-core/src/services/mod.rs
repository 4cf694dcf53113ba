//! Contracts for the two hosted collaborator services.
//!
//! Both are single-shot request/response calls: no streaming, no partial
//! results, no built-in retry. All user-facing degradation on [`Fault`] is the
//! caller's job (the session objects own it). Futures here are `?Send` since
//! the app's futures run on the browser's single-threaded executor.

pub mod gemini;
pub mod supabase;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Fault;
use crate::watch::WatchHandle;

pub use gemini::GeminiCoach;
pub use supabase::SupabaseAccount;

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// The wire projection of a chat turn: role and text, timestamps stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnPayload {
    pub role: Role,
    pub text: String,
}

/// What kind of media the user uploaded for form analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// MIME type to send when the browser reports none for the file.
    pub fn fallback_mime(self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Video => "video/mp4",
        }
    }
}

/// Generative coaching service: text chat and multimodal media analysis.
#[async_trait(?Send)]
pub trait CoachingService {
    /// Send one chat message with the full prior turn sequence, in original
    /// order, and get the model's reply text.
    async fn chat(&self, message: &str, history: &[TurnPayload]) -> Result<String, Fault>;

    /// Analyze an uploaded media blob against a text prompt.
    async fn analyze_media(
        &self,
        media: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, Fault>;
}

/// An authenticated user session. Presence gates all authenticated views.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}

/// A saved workout routine, owned by the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineRecord {
    pub id: String,
    pub owner_user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Ordered exercise references; possibly empty.
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// Account and persistence service: authentication plus routine storage
/// scoped to the authenticated user.
#[async_trait(?Send)]
pub trait AccountService {
    /// Create an account. `Ok(None)` means the provider deferred to e-mail
    /// confirmation and no session exists yet.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<AuthSession>, Fault>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Fault>;

    /// Always succeeds from the caller's point of view: local session state
    /// is cleared even if the remote call fails.
    async fn sign_out(&self);

    async fn current_session(&self) -> Option<AuthSession>;

    /// Subscribe to sign-in/out transitions. The subscription lives as long
    /// as the returned handle.
    fn on_session_change(
        &self,
        listener: Box<dyn Fn(Option<&AuthSession>)>,
    ) -> WatchHandle;

    /// List the owner's routines, newest first.
    async fn list_routines(&self, owner_user_id: &str) -> Result<Vec<RoutineRecord>, Fault>;

    /// Create a routine. Callers must re-fetch the list afterwards; no
    /// optimistic local insert is guaranteed.
    async fn create_routine(&self, owner_user_id: &str, name: &str) -> Result<(), Fault>;
}
