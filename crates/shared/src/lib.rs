//! Shared types for the botdeck chatbot dashboard.
//!
//! These are the wire contract between the client and the chatbot API:
//! the `Chatbot` model and the client-side error taxonomy.

pub mod error;
pub mod models;

pub use error::ApiError;
pub use models::Chatbot;
