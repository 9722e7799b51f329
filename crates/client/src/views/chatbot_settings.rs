//! Settings page for a single chatbot.
//!
//! Read-only surface: configuration changes go through the backend's own
//! editor, this page shows what the dashboard knows about the bot.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::Route;

#[component]
pub fn ChatbotSettings(id: ReadSignal<String>) -> Element {
    let client = use_context::<ApiClient>();

    let chatbot = use_resource(move || {
        let client = client.clone();
        let id = id.read().clone();
        async move {
            client.get_chatbot(&id).await.map_err(|e| {
                crate::log_error!("failed to load chatbot {}: {}", id, e);
                "Could not load this chatbot.".to_string()
            })
        }
    });

    let body = match chatbot.read().as_ref() {
        None => rsx! {
            div { class: "rounded-lg border border-[#3f4147] bg-[#313338] p-8 text-center text-sm text-gray-400",
                "Loading..."
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "rounded-lg border border-red-500/30 bg-red-500/10 p-4 text-sm text-red-400",
                "{err}"
            }
        },
        Some(Ok(bot)) => {
            let created = bot.created_at.format("%b %e, %Y").to_string();
            rsx! {
                div { class: "rounded-lg border border-[#3f4147] bg-[#313338]",
                    div { class: "border-b border-[#3f4147] px-6 py-4",
                        h1 { class: "text-xl font-bold text-white", "{bot.name}" }
                        p { class: "mt-1 text-sm text-gray-400", "Chatbot settings" }
                    }
                    div { class: "space-y-4 px-6 py-4 text-sm",
                        div {
                            div { class: "text-gray-400", "Name" }
                            div { class: "mt-1 text-white", "{bot.name}" }
                        }
                        div {
                            div { class: "text-gray-400", "Model" }
                            div { class: "mt-1 text-white", "{bot.model_id}" }
                        }
                        div {
                            div { class: "text-gray-400", "Created" }
                            div { class: "mt-1 text-white", "{created}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "mx-auto max-w-3xl px-6 py-8",
            Link {
                to: Route::ChatbotList {},
                class: "text-sm text-gray-400 hover:text-white transition-colors",
                "\u{2190} Back to chatbots"
            }
            div { class: "mt-4", {body} }
        }
    }
}
