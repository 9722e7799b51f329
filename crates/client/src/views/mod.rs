//! View components for the application.

pub mod chatbot_chat;
pub mod chatbot_list;
pub mod chatbot_settings;
pub mod home;
pub mod layouts;

pub use chatbot_chat::ChatbotChat;
pub use chatbot_list::{ChatbotList, ChatbotListState};
pub use chatbot_settings::ChatbotSettings;
pub use home::Home;
pub use layouts::DashboardLayout;
