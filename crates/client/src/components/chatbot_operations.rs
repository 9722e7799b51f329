//! Per-row action menu for a chatbot: navigate, publish, delete.
//!
//! Publish is fire-and-forget. Delete goes through a confirmation dialog
//! whose state machine (`DeleteDialog`) and network flow live in
//! `crate::operations`; this component only wires them to signals.

use dioxus::prelude::*;

use botdeck_shared::Chatbot;

use crate::api_client::ApiClient;
use crate::components::toast::ToastContext;
use crate::components::ui::{AlertDialog, DropdownMenu, DropdownMenuItem, DropdownMenuSeparator};
use crate::hooks::use_refresh_resource;
use crate::operations::{self, DeleteDialog};
use crate::views::ChatbotListState;
use crate::Route;

#[derive(Props, Clone, PartialEq)]
pub struct ChatbotOperationsProps {
    pub chatbot: Chatbot,
}

#[component]
pub fn ChatbotOperations(props: ChatbotOperationsProps) -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_context::<ToastContext>();
    let mut refresh = use_refresh_resource::<ChatbotListState>();
    let mut dialog = use_signal(DeleteDialog::new);

    let chatbot_id = props.chatbot.id.clone();
    let publish_client = client.clone();
    let publish_id = chatbot_id.clone();
    let delete_client = client.clone();
    let delete_id = chatbot_id.clone();

    rsx! {
        DropdownMenu {
            trigger: rsx! {
                svg {
                    class: "h-4 w-4",
                    fill: "currentColor",
                    view_box: "0 0 24 24",
                    circle { cx: "5", cy: "12", r: "2" }
                    circle { cx: "12", cy: "12", r: "2" }
                    circle { cx: "19", cy: "12", r: "2" }
                }
            },
            DropdownMenuItem {
                Link {
                    to: Route::ChatbotChat { id: chatbot_id.clone() },
                    class: "flex w-full",
                    "Chat"
                }
            }
            DropdownMenuItem {
                Link {
                    to: Route::ChatbotSettings { id: chatbot_id.clone() },
                    class: "flex w-full",
                    "Settings"
                }
            }
            DropdownMenuItem {
                onselect: move |_| {
                    let client = publish_client.clone();
                    let id = publish_id.clone();
                    spawn(async move {
                        operations::publish_chatbot(&client, &toasts, &id).await;
                    });
                },
                "Publish"
            }
            DropdownMenuSeparator {}
            DropdownMenuItem {
                destructive: true,
                onselect: move |_| dialog.write().request(),
                "Delete"
            }
        }
        if dialog.read().is_open() {
            AlertDialog {
                title: "Are you sure you want to delete this chatbot?",
                description: "This action cannot be undone.",
                confirm_label: "Delete",
                loading: dialog.read().is_in_progress(),
                on_cancel: move |_| dialog.write().cancel(),
                on_confirm: move |_| {
                    if !dialog.write().begin() {
                        return;
                    }
                    let client = delete_client.clone();
                    let id = delete_id.clone();
                    spawn(async move {
                        let deleted = operations::delete_chatbot(&client, &toasts, &id).await;
                        dialog.write().finish(deleted);
                        if deleted {
                            refresh.write();
                        }
                    });
                },
            }
        }
    }
}
