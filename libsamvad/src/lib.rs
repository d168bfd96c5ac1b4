//! Samvad - an in-memory community wellness forum core
//!
//! This library provides the state store, services, and seed handling
//! behind the Samvad forum front ends (terminal UI and CLI tools). State
//! lives in memory for the lifetime of the process; there is no network
//! and no persistence.

pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SamvadError};
pub use seed::SeedData;
pub use service::ForumService;
pub use store::{reduce, Action, ForumState, ForumStore};
pub use types::{Answer, Category, CategoryFilter, Collection, Question, Thought};
