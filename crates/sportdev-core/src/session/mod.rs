//! Session objects owned by the application shell.
//!
//! Each session has a narrow mutation API and interior mutability: the app is
//! single-threaded and event-driven, so state is only ever touched between
//! suspension points, never concurrently.

pub mod chat;
pub mod onboarding;
pub mod routines;
pub mod selection;

pub use chat::{ChatRequest, ChatSession, ChatState, ChatTurn};
pub use onboarding::{OnboardingFlow, OnboardingStep, TrainingGoal, GENERATING_DELAY_MS};
pub use routines::RoutinePlanner;
pub use selection::SelectionSession;
