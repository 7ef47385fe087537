pub mod config;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod query;
pub mod scheduler;
pub mod source;
