//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{ChatbotChat, ChatbotList, ChatbotSettings, DashboardLayout, Home};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Home {},

        #[nest("/dashboard/chatbots")]
            #[route("/")]
            ChatbotList {},
            #[route("/:id")]
            ChatbotSettings { id: String },
            #[route("/:id/chat")]
            ChatbotChat { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chatbot_routes_render_dashboard_paths() {
        assert_eq!(
            Route::ChatbotSettings {
                id: "abc123".to_string()
            }
            .to_string(),
            "/dashboard/chatbots/abc123"
        );
        assert_eq!(
            Route::ChatbotChat {
                id: "abc123".to_string()
            }
            .to_string(),
            "/dashboard/chatbots/abc123/chat"
        );
    }

    #[test]
    fn chat_path_parses_back_to_route() {
        let route: Route = "/dashboard/chatbots/abc123/chat".parse().unwrap();
        assert_eq!(
            route,
            Route::ChatbotChat {
                id: "abc123".to_string()
            }
        );
    }
}
