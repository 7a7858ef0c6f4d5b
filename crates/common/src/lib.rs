//! Common utilities and shared types for pinboard.
//!
//! This crate provides foundational components used across all pinboard
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: UUID v4 identifiers via [`IdGenerator`]
//! - **Timestamps**: ISO-8601 UTC timestamp formatting via [`utc_now_iso`]

pub mod config;
pub mod error;
pub mod id;
pub mod time;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
pub use time::utc_now_iso;
