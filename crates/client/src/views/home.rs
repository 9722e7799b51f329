//! Landing page: forwards straight to the chatbot dashboard.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    use_effect(move || {
        let _ = nav.replace(Route::ChatbotList {});
    });

    rsx! {
        div { class: "p-8 text-center text-sm text-gray-400", "Redirecting..." }
    }
}
