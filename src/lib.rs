pub mod config;
pub mod error;
pub mod event;
pub mod hook;
pub mod line;
pub mod log;
pub mod message;
