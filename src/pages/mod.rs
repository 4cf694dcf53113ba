pub mod achievements;
pub mod auth;
pub mod community;
pub mod dashboard;
pub mod goals;
pub mod library;
pub mod onboarding;
pub mod progress;
pub mod routines;
pub mod wellness;
pub mod workout;
