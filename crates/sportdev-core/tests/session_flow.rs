//! End-to-end session behavior over in-memory service doubles: the chat
//! request/response cycle, the routine create/refetch cycle, the detail-view
//! analysis cycle, and session-change notification.

use std::cell::{Cell, RefCell};

use chrono::Utc;
use sportdev_core::catalog::exercise_catalog;
use sportdev_core::error::Fault;
use sportdev_core::services::{
    AccountService, AuthSession, CoachingService, MediaKind, Role, RoutineRecord, TurnPayload,
};
use sportdev_core::session::chat::{ChatSession, COACH_FALLBACK};
use sportdev_core::session::selection::{SelectionSession, ANALYSIS_FALLBACK};
use sportdev_core::session::RoutinePlanner;
use sportdev_core::watch::{SessionWatch, WatchHandle};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Coaching double that replies from a script and records every request.
struct ScriptedCoach {
    replies: RefCell<Vec<Result<String, Fault>>>,
    chat_calls: Cell<usize>,
    histories: RefCell<Vec<Vec<TurnPayload>>>,
}

impl ScriptedCoach {
    fn new(replies: Vec<Result<String, Fault>>) -> Self {
        Self {
            replies: RefCell::new(replies),
            chat_calls: Cell::new(0),
            histories: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl CoachingService for ScriptedCoach {
    async fn chat(&self, _message: &str, history: &[TurnPayload]) -> Result<String, Fault> {
        self.chat_calls.set(self.chat_calls.get() + 1);
        self.histories.borrow_mut().push(history.to_vec());
        self.replies.borrow_mut().remove(0)
    }

    async fn analyze_media(
        &self,
        _media: &[u8],
        _mime_type: &str,
        _prompt: &str,
    ) -> Result<String, Fault> {
        self.replies.borrow_mut().remove(0)
    }
}

/// Account double with in-memory users, routines, and change notification.
#[derive(Default)]
struct MemoryAccount {
    session: RefCell<Option<AuthSession>>,
    routines: RefCell<Vec<RoutineRecord>>,
    create_calls: Cell<usize>,
    watch: SessionWatch,
}

impl MemoryAccount {
    fn set_session(&self, session: Option<AuthSession>) {
        {
            *self.session.borrow_mut() = session.clone();
        }
        self.watch.notify(session.as_ref());
    }
}

#[async_trait::async_trait(?Send)]
impl AccountService for MemoryAccount {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Option<AuthSession>, Fault> {
        // E-mail confirmation pending: registered, but no session yet.
        let _ = email;
        Ok(None)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Fault> {
        if password.is_empty() {
            return Err(Fault::Service("Invalid login credentials".to_string()));
        }
        let session = AuthSession {
            user_id: format!("uid-{email}"),
            email: email.to_string(),
            access_token: "test-token".to_string(),
        };
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) {
        self.set_session(None);
    }

    async fn current_session(&self) -> Option<AuthSession> {
        self.session.borrow().clone()
    }

    fn on_session_change(&self, listener: Box<dyn Fn(Option<&AuthSession>)>) -> WatchHandle {
        self.watch.subscribe(move |s| listener(s))
    }

    async fn list_routines(&self, owner: &str) -> Result<Vec<RoutineRecord>, Fault> {
        Ok(self
            .routines
            .borrow()
            .iter()
            .filter(|r| r.owner_user_id == owner)
            .cloned()
            .collect())
    }

    async fn create_routine(&self, owner: &str, name: &str) -> Result<(), Fault> {
        self.create_calls.set(self.create_calls.get() + 1);
        let mut routines = self.routines.borrow_mut();
        let record = RoutineRecord {
            id: format!("r{}", routines.len() + 1),
            owner_user_id: owner.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            exercises: Vec::new(),
        };
        routines.insert(0, record);
        Ok(())
    }
}

#[tokio::test]
async fn chat_round_trips_keep_strict_turn_order() {
    init_tracing();
    let session = ChatSession::new();
    let coach = ScriptedCoach::new(vec![Ok("r1".to_string()), Ok("r2".to_string())]);

    session.send("A", &coach).await;
    session.send("B", &coach).await;

    let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![Role::Model, Role::User, Role::Model, Role::User, Role::Model]
    );

    // The second request carried every prior turn, in original order.
    let histories = coach.histories.borrow();
    assert_eq!(histories[1].len(), 3);
    assert_eq!(histories[1][1].text, "A");
    assert_eq!(histories[1][2].text, "r1");
}

#[tokio::test]
async fn chat_fault_degrades_and_recovers() {
    init_tracing();
    let session = ChatSession::new();
    let coach = ScriptedCoach::new(vec![
        Err(Fault::Network("offline".to_string())),
        Ok("back online".to_string()),
    ]);

    session.send("first", &coach).await;
    assert_eq!(session.turns().last().unwrap().text, COACH_FALLBACK);

    // The failure released the in-flight flag; the next send goes through.
    session.send("second", &coach).await;
    assert_eq!(session.turns().last().unwrap().text, "back online");
    assert_eq!(coach.chat_calls.get(), 2);
}

#[tokio::test]
async fn duplicate_send_produces_no_second_call() {
    init_tracing();
    let session = ChatSession::new();
    let coach = ScriptedCoach::new(vec![Ok("only reply".to_string())]);

    let request = session.begin("first").expect("first send accepted");
    // While the request is outstanding, another send is ignored outright.
    session.send("second", &coach).await;
    assert_eq!(coach.chat_calls.get(), 0);
    assert_eq!(session.turns().len(), 2);

    let outcome = coach.chat(&request.message, &request.history).await;
    session.resolve(outcome);
    assert_eq!(session.turns().len(), 3);
    assert_eq!(coach.chat_calls.get(), 1);
}

#[tokio::test]
async fn routine_creation_validates_then_refetches() {
    init_tracing();
    let account = MemoryAccount::default();
    let planner = RoutinePlanner::new();

    // Empty name: rejected locally, service never called.
    assert!(planner.create(&account, "u1", "").await.is_err());
    assert_eq!(account.create_calls.get(), 0);

    // Valid name: exactly one create, list re-fetched and includes it.
    planner.create(&account, "u1", "Leg Day").await.unwrap();
    assert_eq!(account.create_calls.get(), 1);
    assert!(planner.routines().iter().any(|r| r.name == "Leg Day"));

    let listed = account.list_routines("u1").await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn selection_analysis_survives_service_failure() {
    init_tracing();
    let selection = SelectionSession::new();
    let squat = &exercise_catalog()[0];
    selection.select(squat);

    let coach = ScriptedCoach::new(vec![Err(Fault::Service("quota".to_string()))]);
    selection
        .analyze(&[0xFF, 0xD8], MediaKind::Image, "image/jpeg", &coach)
        .await;

    // The view is never left without feedback and the flag is released.
    assert_eq!(selection.last_analysis().as_deref(), Some(ANALYSIS_FALLBACK));
    assert!(!selection.is_analyzing());

    // Selection is untouched by the failure.
    assert_eq!(selection.selected().unwrap().id, squat.id);
}

#[tokio::test]
async fn session_watch_tracks_sign_in_and_out() {
    init_tracing();
    let account = MemoryAccount::default();

    let log: std::rc::Rc<RefCell<Vec<Option<String>>>> =
        std::rc::Rc::new(RefCell::new(Vec::new()));
    let log_in = std::rc::Rc::clone(&log);
    let handle = account.on_session_change(Box::new(move |session| {
        log_in.borrow_mut().push(session.map(|s| s.email.clone()));
    }));

    let session = account.sign_in("alex@example.com", "hunter2").await.unwrap();
    assert_eq!(account.current_session().await, Some(session));
    account.sign_out().await;
    assert_eq!(account.current_session().await, None);

    assert_eq!(
        *log.borrow(),
        vec![Some("alex@example.com".to_string()), None]
    );

    // After the handle is gone, further transitions are not observed.
    drop(handle);
    account.sign_in("alex@example.com", "hunter2").await.unwrap();
    assert_eq!(log.borrow().len(), 2);
}
