//! Core services.

mod message;

pub use message::MessageService;
