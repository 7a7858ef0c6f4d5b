//! Core business logic for pinboard.
//!
//! This crate holds the message entity, the in-memory [`MessageStore`],
//! and the [`MessageService`] exposing create/list/get/delete operations
//! to the API layer.

pub mod services;
pub mod store;

pub use services::MessageService;
pub use store::{Message, MessageStore};
