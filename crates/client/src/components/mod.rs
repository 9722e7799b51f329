//! Application components.

pub mod chatbot_operations;
pub mod toast;
pub mod ui;

pub use chatbot_operations::ChatbotOperations;
pub use toast::{Notifier, ToastContext, ToastLevel, ToastMessage, ToastProvider, ToastViewport};
