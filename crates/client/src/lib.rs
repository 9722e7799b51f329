//! Botdeck Client - Dioxus web application
//!
//! This crate contains the web/desktop client for botdeck, a dashboard
//! for managing chatbots hosted by an external chatbot API.

pub mod api_client;
pub mod components;
pub mod hooks;
pub mod logging;
pub mod operations;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use routes::Route;
