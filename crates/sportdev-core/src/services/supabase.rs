//! Account and persistence client for the hosted Supabase project.
//!
//! Authentication goes through the auth endpoints, routine storage through
//! PostgREST. The client owns the in-memory session and broadcasts every
//! sign-in/out transition through its [`SessionWatch`]; nothing is persisted
//! across a reload. Provider error messages are surfaced verbatim.

use std::cell::RefCell;

use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::config::AccountConfig;
use crate::error::Fault;
use crate::services::{AccountService, AuthSession, RoutineRecord};
use crate::watch::{SessionWatch, WatchHandle};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Account service backed by a hosted Supabase project.
pub struct SupabaseAccount {
    client: reqwest::Client,
    config: AccountConfig,
    session: RefCell<Option<AuthSession>>,
    watch: SessionWatch,
}

impl SupabaseAccount {
    pub fn new(config: AccountConfig) -> Result<Self, Fault> {
        Ok(Self {
            client: build_client()?,
            config,
            session: RefCell::new(None),
            watch: SessionWatch::new(),
        })
    }

    /// Resolve a service path against the project URL. A malformed project
    /// URL degrades to a fault at call time rather than failing startup.
    fn service_url(&self, path: &str) -> Result<url::Url, Fault> {
        url::Url::parse(&self.config.project_url)
            .and_then(|base| base.join(path))
            .map_err(|e| Fault::Service(format!("invalid account service URL: {e}")))
    }

    fn bearer_token(&self) -> Result<String, Fault> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
            .ok_or(Fault::NotAuthenticated)
    }

    fn set_session(&self, session: Option<AuthSession>) {
        {
            *self.session.borrow_mut() = session.clone();
        }
        self.watch.notify(session.as_ref());
    }

    async fn auth_post(&self, path: &str, body: Value) -> Result<Value, Fault> {
        let url = self.service_url(path)?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let fault = Fault::Network(format!("account service request failed: {e}"));
                error!("{}", fault);
                fault
            })?;

        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            let fault = Fault::Service(error_message(status.as_u16(), &body_text));
            warn!("Account service rejected {}: {}", path, fault);
            return Err(fault);
        }

        serde_json::from_str(&body_text)
            .map_err(|e| Fault::Protocol(format!("failed to parse account service response: {e}")))
    }
}

#[async_trait::async_trait(?Send)]
impl AccountService for SupabaseAccount {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<AuthSession>, Fault> {
        info!("Signing up {}", email);
        let body = self
            .auth_post("auth/v1/signup", json!({"email": email, "password": password}))
            .await?;

        // With e-mail confirmation enabled the provider returns a bare user
        // and no token; the session only exists after confirmation.
        match parse_session(&body) {
            Some(session) => {
                self.set_session(Some(session.clone()));
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Fault> {
        info!("Signing in {}", email);
        let body = self
            .auth_post(
                "auth/v1/token?grant_type=password",
                json!({"email": email, "password": password}),
            )
            .await?;

        let session = parse_session(&body).ok_or_else(|| {
            Fault::Protocol("sign-in response carried no session".to_string())
        })?;
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) {
        let token = self.session.borrow().as_ref().map(|s| s.access_token.clone());
        if let (Some(token), Ok(url)) = (token, self.service_url("auth/v1/logout")) {
            let result = self
                .client
                .post(url)
                .header("apikey", &self.config.anon_key)
                .header("authorization", format!("Bearer {token}"))
                .send()
                .await;
            if let Err(e) = result {
                // Local state clears regardless; the token just outlives us.
                warn!("Remote sign-out failed: {}", e);
            }
        }
        self.set_session(None);
    }

    async fn current_session(&self) -> Option<AuthSession> {
        self.session.borrow().clone()
    }

    fn on_session_change(&self, listener: Box<dyn Fn(Option<&AuthSession>)>) -> WatchHandle {
        self.watch.subscribe(move |session| listener(session))
    }

    async fn list_routines(&self, owner_user_id: &str) -> Result<Vec<RoutineRecord>, Fault> {
        let token = self.bearer_token()?;
        let mut url = self.service_url("rest/v1/routines")?;
        url.query_pairs_mut()
            .append_pair("select", "id,owner_user_id,name,created_at,exercises")
            .append_pair("owner_user_id", &format!("eq.{owner_user_id}"))
            .append_pair("order", "created_at.desc");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.config.anon_key)
            .header("authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| {
                let fault = Fault::Network(format!("routine listing failed: {e}"));
                error!("{}", fault);
                fault
            })?;

        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Fault::Service(error_message(status.as_u16(), &body_text)));
        }

        serde_json::from_str(&body_text)
            .map_err(|e| Fault::Protocol(format!("failed to parse routine list: {e}")))
    }

    async fn create_routine(&self, owner_user_id: &str, name: &str) -> Result<(), Fault> {
        let token = self.bearer_token()?;
        let url = self.service_url("rest/v1/routines")?;
        info!("Creating routine '{}' for {}", name, owner_user_id);

        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .header("prefer", "return=minimal")
            .json(&json!({
                "owner_user_id": owner_user_id,
                "name": name,
                "exercises": [],
            }))
            .send()
            .await
            .map_err(|e| {
                let fault = Fault::Network(format!("routine creation failed: {e}"));
                error!("{}", fault);
                fault
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Fault::Service(error_message(status.as_u16(), &body_text)));
        }
        Ok(())
    }
}

/// Pull a session out of an auth response body, if one is present.
fn parse_session(body: &Value) -> Option<AuthSession> {
    let access_token = body["access_token"].as_str()?;
    let user = &body["user"];
    Some(AuthSession {
        user_id: user["id"].as_str()?.to_string(),
        email: user["email"].as_str().unwrap_or_default().to_string(),
        access_token: access_token.to_string(),
    })
}

/// Extract the provider's human-readable message from an error body.
/// Auth and PostgREST spell the field differently depending on the failure.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for field in ["error_description", "msg", "message", "error"] {
            if let Some(message) = json[field].as_str() {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    format!("Account service error ({status})")
}

fn build_client() -> Result<reqwest::Client, Fault> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));
    builder
        .build()
        .map_err(|e| Fault::Network(format!("failed to build HTTP client: {e}")))
}
