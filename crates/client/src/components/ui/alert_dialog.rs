//! Confirmation dialog for destructive actions.

use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct AlertDialogProps {
    pub title: String,
    pub description: String,
    #[props(optional)]
    pub confirm_label: Option<String>,
    /// While true the confirm button is disabled and shows a spinner.
    pub loading: bool,
    pub on_cancel: EventHandler<()>,
    pub on_confirm: EventHandler<()>,
}

#[component]
pub fn AlertDialog(props: AlertDialogProps) -> Element {
    let loading = props.loading;
    let confirm_label = props.confirm_label.clone().unwrap_or_else(|| "Confirm".to_string());

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/70",
            onclick: move |_| {
                if !loading {
                    props.on_cancel.call(());
                }
            },
            div {
                class: "w-full max-w-md mx-4 rounded-lg bg-[#313338] shadow-2xl",
                onclick: move |e| e.stop_propagation(),
                div { class: "px-6 py-4 border-b border-[#3f4147]",
                    h3 { class: "text-xl font-bold text-white", "{props.title}" }
                    p { class: "text-sm text-gray-400 mt-1", "{props.description}" }
                }
                div { class: "px-6 py-4 flex justify-end gap-3",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-gray-300 hover:text-white transition-colors",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: loading,
                        onclick: move |_| props.on_confirm.call(()),
                        if loading {
                            svg {
                                class: "mr-2 h-4 w-4 animate-spin",
                                fill: "none",
                                view_box: "0 0 24 24",
                                circle {
                                    class: "opacity-25",
                                    cx: "12",
                                    cy: "12",
                                    r: "10",
                                    stroke: "currentColor",
                                    stroke_width: "4",
                                }
                                path {
                                    class: "opacity-75",
                                    fill: "currentColor",
                                    d: "M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z",
                                }
                            }
                        }
                        span { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
