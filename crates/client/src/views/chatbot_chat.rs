//! Chat page for a single chatbot.
//!
//! The conversation itself is served by the chatbot backend's embedded
//! widget; this page is the dashboard-side shell around it.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::Route;

#[component]
pub fn ChatbotChat(id: ReadSignal<String>) -> Element {
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
            div { class: "p-8 text-center text-sm text-gray-400", "Loading..." }
        },
        Some(Err(err)) => rsx! {
            div { class: "m-4 rounded-lg border border-red-500/30 bg-red-500/10 p-4 text-sm text-red-400",
                "{err}"
            }
        },
        Some(Ok(bot)) => rsx! {
            div { class: "flex h-12 items-center justify-between border-b border-[#3f4147] px-4",
                div { class: "font-semibold text-white", "{bot.name}" }
                span { class: "rounded-full border border-[#3f4147] bg-[#2b2d31] px-2 py-0.5 text-xs text-gray-400",
                    "{bot.model_id}"
                }
            }
            div { class: "flex flex-1 flex-col items-center justify-center p-8 text-center",
                p { class: "font-semibold text-white", "{bot.name} is ready" }
                p { class: "mt-1 text-sm text-gray-400",
                    "Conversations run through the published chat widget."
                }
            }
        },
    };

    rsx! {
        div { class: "mx-auto flex min-h-[70vh] max-w-3xl flex-col px-6 py-8",
            Link {
                to: Route::ChatbotList {},
                class: "mb-4 text-sm text-gray-400 hover:text-white transition-colors",
                "\u{2190} Back to chatbots"
            }
            div { class: "flex flex-1 flex-col rounded-lg border border-[#3f4147] bg-[#313338]",
                {body}
            }
        }
    }
}
