//! Local view of the user's saved routines.
//!
//! The persistence service owns the records; this session only caches the
//! last fetched list. Creation validates the name before any network call and
//! re-fetches the list after a successful write instead of inserting locally.

use std::cell::{Cell, RefCell};

use crate::error::Fault;
use crate::services::{AccountService, RoutineRecord};

/// Cached routine list plus the in-flight flag for the routines view.
#[derive(Default)]
pub struct RoutinePlanner {
    routines: RefCell<Vec<RoutineRecord>>,
    loading: Cell<bool>,
}

impl RoutinePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the cached list, newest first as the service returned it.
    pub fn routines(&self) -> Vec<RoutineRecord> {
        self.routines.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Replace the cache with the service's current list.
    pub async fn refresh(
        &self,
        account: &dyn AccountService,
        owner_user_id: &str,
    ) -> Result<(), Fault> {
        self.loading.set(true);
        let result = account.list_routines(owner_user_id).await;
        self.loading.set(false);

        let routines = result?;
        *self.routines.borrow_mut() = routines;
        Ok(())
    }

    /// Create a routine and re-fetch the list.
    ///
    /// Blank names are rejected before the service is ever called.
    pub async fn create(
        &self,
        account: &dyn AccountService,
        owner_user_id: &str,
        name: &str,
    ) -> Result<(), Fault> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Fault::Invalid("Routine name must not be empty".to_string()));
        }

        account.create_routine(owner_user_id, name).await?;
        self.refresh(account, owner_user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AuthSession;
    use crate::watch::{SessionWatch, WatchHandle};
    use chrono::Utc;
    use std::cell::Cell as StdCell;

    /// In-memory account double that stores routines newest-first.
    struct MemoryAccount {
        routines: RefCell<Vec<RoutineRecord>>,
        create_calls: StdCell<usize>,
        list_calls: StdCell<usize>,
        fail_create: bool,
        watch: SessionWatch,
    }

    impl MemoryAccount {
        fn new() -> Self {
            Self {
                routines: RefCell::new(Vec::new()),
                create_calls: StdCell::new(0),
                list_calls: StdCell::new(0),
                fail_create: false,
                watch: SessionWatch::new(),
            }
        }

        fn failing() -> Self {
            Self {
                fail_create: true,
                ..Self::new()
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl AccountService for MemoryAccount {
        async fn sign_up(&self, _: &str, _: &str) -> Result<Option<AuthSession>, Fault> {
            Ok(None)
        }

        async fn sign_in(&self, _: &str, _: &str) -> Result<AuthSession, Fault> {
            unreachable!("planner tests never sign in")
        }

        async fn sign_out(&self) {}

        async fn current_session(&self) -> Option<AuthSession> {
            None
        }

        fn on_session_change(
            &self,
            listener: Box<dyn Fn(Option<&AuthSession>)>,
        ) -> WatchHandle {
            self.watch.subscribe(move |s| listener(s))
        }

        async fn list_routines(&self, owner: &str) -> Result<Vec<RoutineRecord>, Fault> {
            self.list_calls.set(self.list_calls.get() + 1);
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
            if self.fail_create {
                return Err(Fault::Service("insert rejected".to_string()));
            }
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
    async fn test_blank_name_never_reaches_the_service() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::new();

        let result = planner.create(&account, "u1", "").await;
        assert!(matches!(result, Err(Fault::Invalid(_))));

        let result = planner.create(&account, "u1", "   ").await;
        assert!(matches!(result, Err(Fault::Invalid(_))));

        assert_eq!(account.create_calls.get(), 0);
        assert_eq!(account.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_create_calls_service_once_and_refetches() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::new();

        planner.create(&account, "u1", "Leg Day").await.unwrap();

        assert_eq!(account.create_calls.get(), 1);
        assert_eq!(account.list_calls.get(), 1);
        let names: Vec<String> = planner.routines().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Leg Day".to_string()]);
    }

    #[tokio::test]
    async fn test_name_is_trimmed_before_create() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::new();

        planner.create(&account, "u1", "  Push Day  ").await.unwrap();
        assert_eq!(planner.routines()[0].name, "Push Day");
    }

    #[tokio::test]
    async fn test_failed_create_leaves_cache_untouched() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::failing();

        let result = planner.create(&account, "u1", "Leg Day").await;
        assert!(matches!(result, Err(Fault::Service(_))));
        assert_eq!(account.list_calls.get(), 0);
        assert!(planner.routines().is_empty());
        assert!(!planner.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_replaces_cache_newest_first() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::new();

        planner.create(&account, "u1", "Leg Day").await.unwrap();
        planner.create(&account, "u1", "Push Day").await.unwrap();

        let names: Vec<String> = planner.routines().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Push Day".to_string(), "Leg Day".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_scopes_to_owner() {
        let planner = RoutinePlanner::new();
        let account = MemoryAccount::new();
        account.create_routine("u2", "Someone Else's").await.unwrap();

        planner.refresh(&account, "u1").await.unwrap();
        assert!(planner.routines().is_empty());
    }
}
