pub mod ai_chat;
pub mod exercise_card;
pub mod exercise_drawer;
pub mod filter_panel;
pub mod sidebar;
