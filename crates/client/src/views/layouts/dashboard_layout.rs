//! Dashboard chrome: top navbar, toast surface, routed content below.

use dioxus::prelude::*;

use crate::components::{ToastProvider, ToastViewport};
use crate::Route;

#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        ToastProvider {
            div { class: "min-h-screen bg-[#1e1f22] text-gray-100",
                header { class: "border-b border-[#3f4147] bg-[#313338]",
                    div { class: "mx-auto flex h-14 max-w-3xl items-center justify-between px-6",
                        Link {
                            to: Route::ChatbotList {},
                            class: "text-lg font-bold text-white",
                            "Botdeck"
                        }
                        nav { class: "flex items-center gap-4 text-sm text-gray-300",
                            Link {
                                to: Route::ChatbotList {},
                                class: "hover:text-white transition-colors",
                                "Chatbots"
                            }
                        }
                    }
                }
                Outlet::<Route> {}
            }
            ToastViewport {}
        }
    }
}
