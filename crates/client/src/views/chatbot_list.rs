//! Dashboard page listing the user's chatbots.

use dioxus::prelude::*;

use botdeck_shared::Chatbot;

use crate::api_client::ApiClient;
use crate::components::ChatbotOperations;
use crate::hooks::use_refreshable_resource;
use crate::Route;

/// Outcome of the list fetch. Also the type that keys the refresh signal the
/// per-row action menu fires after a successful delete.
pub type ChatbotListState = Result<Vec<Chatbot>, String>;

#[component]
pub fn ChatbotList() -> Element {
    let client = use_context::<ApiClient>();

    let chatbots = use_refreshable_resource(move || {
        let client = client.clone();
        async move {
            client.list_chatbots().await.map_err(|e| {
                crate::log_warn!("failed to load chatbots: {}", e);
                "Could not load your chatbots. Refresh the page to try again.".to_string()
            })
        }
    });

    let body = match chatbots.read().as_ref() {
        None => rsx! {
            div { class: "rounded-lg border border-[#3f4147] bg-[#313338] p-8 text-center text-sm text-gray-400",
                "Loading chatbots..."
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "rounded-lg border border-red-500/30 bg-red-500/10 p-4 text-sm text-red-400",
                "{err}"
            }
        },
        Some(Ok(bots)) if bots.is_empty() => rsx! {
            div { class: "rounded-lg border border-[#3f4147] bg-[#313338] p-8 text-center",
                p { class: "font-semibold text-white", "No chatbots yet" }
                p { class: "mt-1 text-sm text-gray-400",
                    "Chatbots you create will show up here."
                }
            }
        },
        Some(Ok(bots)) => rsx! {
            div { class: "divide-y divide-[#3f4147] rounded-lg border border-[#3f4147] bg-[#313338]",
                for bot in bots.iter() {
                    ChatbotRow { key: "{bot.id}", chatbot: bot.clone() }
                }
            }
        },
    };

    rsx! {
        div { class: "mx-auto max-w-3xl px-6 py-8",
            div { class: "mb-6",
                h1 { class: "text-2xl font-bold text-white", "Chatbots" }
                p { class: "mt-1 text-sm text-gray-400", "Manage your chatbots." }
            }
            {body}
        }
    }
}

#[component]
fn ChatbotRow(chatbot: Chatbot) -> Element {
    let created = chatbot.created_at.format("%b %e, %Y").to_string();

    rsx! {
        div { class: "flex items-center justify-between p-4",
            div { class: "grid gap-1",
                Link {
                    to: Route::ChatbotSettings { id: chatbot.id.clone() },
                    class: "font-semibold text-white hover:underline",
                    "{chatbot.name}"
                }
                div { class: "flex items-center gap-2 text-xs text-gray-400",
                    span { class: "rounded-full border border-[#3f4147] bg-[#2b2d31] px-2 py-0.5",
                        "{chatbot.model_id}"
                    }
                    span { "Created {created}" }
                }
            }
            ChatbotOperations { chatbot: chatbot.clone() }
        }
    }
}
