pub mod ai_chat;
pub mod dashboard;
pub mod health;
pub mod login;
pub mod nutrition;
pub mod profile;
pub mod settings;
