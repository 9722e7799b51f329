//! Botdeck Client - Main entry point
//!
//! A Dioxus dashboard for managing chatbots.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use botdeck_client::api_client::api_base_url;
use botdeck_client::{ApiClient, Route};

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("botdeck_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new().with_base_url(api_base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
