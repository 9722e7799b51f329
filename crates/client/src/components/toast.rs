//! App-wide transient notification (toast) surface.
//!
//! Any component below `ToastProvider` can grab the `ToastContext` and push
//! messages; `ToastViewport` renders the stack in a corner of the screen.
//! Toasts dismiss themselves after a few seconds or on click.

use dioxus::prelude::*;

/// Capability for emitting a user-facing notification.
///
/// Operations take this instead of the concrete toast context so the flows
/// can be driven with a recording double in tests.
pub trait Notifier {
    fn notify(&self, toast: ToastMessage);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Destructive,
}

/// A single notification: short title, one-line description, severity.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub level: ToastLevel,
}

impl ToastMessage {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: ToastLevel::Info,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: ToastLevel::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: ToastLevel::Destructive,
        }
    }
}

/// Accent classes for the toast card, keyed by severity.
fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "border-[#3f4147] bg-[#313338]",
        ToastLevel::Success => "border-green-500/40 bg-[#2a3331]",
        ToastLevel::Destructive => "border-red-500/40 bg-[#3a2b2d]",
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveToast {
    id: u64,
    message: ToastMessage,
}

/// How long a toast stays on screen before dismissing itself.
const TOAST_TTL_MS: u32 = 5_000;

/// Toast context provided to the app
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    /// Show a toast and schedule its auto-dismissal.
    pub fn push(&self, message: ToastMessage) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;

        let id = {
            let mut n = next_id.write();
            *n += 1;
            *n
        };

        crate::log_debug!("toast {}: {}", id, message.title);
        toasts.write().push(ActiveToast { id, message });

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_TTL_MS as u64)).await;

            toasts.write().retain(|t| t.id != id);
        });
    }

    /// Remove a toast before its timer fires.
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: ToastMessage) {
        self.push(toast);
    }
}

/// Provider component that sets up the toast context
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastContext { toasts, next_id });

    rsx! {
        {children}
    }
}

/// Renders the active toast stack. Mount once, inside `ToastProvider`.
#[component]
pub fn ToastViewport() -> Element {
    let ctx = use_context::<ToastContext>();
    let active: Vec<ActiveToast> = ctx.toasts.read().iter().cloned().collect();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-[100] flex w-80 flex-col gap-2",
            for toast in active {
                ToastCard {
                    key: "{toast.id}",
                    id: toast.id,
                    message: toast.message.clone(),
                }
            }
        }
    }
}

#[component]
fn ToastCard(id: u64, message: ToastMessage) -> Element {
    let ctx = use_context::<ToastContext>();
    let accent = level_class(message.level);

    rsx! {
        div { class: "rounded-lg border {accent} p-4 shadow-2xl text-sm",
            div { class: "flex items-start justify-between gap-2",
                div { class: "font-semibold text-white", "{message.title}" }
                button {
                    class: "text-gray-400 hover:text-white transition-colors",
                    onclick: move |_| ctx.dismiss(id),
                    "\u{00d7}"
                }
            }
            div { class: "mt-1 text-gray-300", "{message.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        let ok = ToastMessage::success("Chatbot deleted.", "Your chatbot was successfully deleted.");
        assert_eq!(ok.level, ToastLevel::Success);

        let bad = ToastMessage::destructive("Something went wrong.", "Please try again.");
        assert_eq!(bad.level, ToastLevel::Destructive);
        assert_eq!(bad.title, "Something went wrong.");
    }

    #[test]
    fn destructive_toasts_are_visually_distinct() {
        assert_ne!(
            level_class(ToastLevel::Destructive),
            level_class(ToastLevel::Success)
        );
        assert!(level_class(ToastLevel::Destructive).contains("red"));
    }
}
