pub mod assets;
pub mod chat;
pub mod health;
pub mod ui;
