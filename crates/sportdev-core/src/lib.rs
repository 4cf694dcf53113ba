//! Domain core for SportDev, the AI-assisted fitness coaching app.
//!
//! Everything with rules lives here: the immutable exercise catalog, the
//! filter engine, the session state machines, and the clients for the two
//! hosted collaborator services. The crate compiles for the browser (where
//! the Leptos shell consumes it) and for native targets (where the tests
//! run); it holds no UI state of its own.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod locale;
pub mod services;
pub mod session;
pub mod watch;

pub use catalog::{
    exercise_catalog, Category, Difficulty, EmphasisRole, Equipment, ExerciseRecord,
    MuscleEmphasis, MuscleGroup,
};
pub use config::{AccountConfig, AppConfig, CoachConfig};
pub use error::Fault;
pub use filter::{filter_exercises, FilterCriteria};
pub use locale::Locale;
pub use services::{
    AccountService, AuthSession, CoachingService, GeminiCoach, MediaKind, Role, RoutineRecord,
    SupabaseAccount, TurnPayload,
};
pub use session::{
    ChatSession, ChatState, ChatTurn, OnboardingFlow, OnboardingStep, RoutinePlanner,
    SelectionSession, TrainingGoal,
};
pub use watch::{SessionWatch, WatchHandle};
