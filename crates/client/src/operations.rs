//! Delete and publish flows for a chatbot.
//!
//! The action menu component stays a thin shell: the observable behavior
//! (which request goes out, which toast is shown, whether the confirm
//! dialog may close) lives here, behind the `ChatbotGateway` and `Notifier`
//! seams so it can be exercised with doubles.

use async_trait::async_trait;
use botdeck_shared::ApiError;

use crate::components::toast::{Notifier, ToastMessage};

/// The two mutations the dashboard performs against a chatbot.
#[async_trait(?Send)]
pub trait ChatbotGateway {
    async fn delete_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError>;
    async fn publish_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError>;
}

/// Issue the DELETE for a chatbot and notify the user of the outcome.
///
/// Returns whether the chatbot was actually deleted, so the caller can keep
/// the confirm dialog open (and skip the list refresh) after a failure. The
/// error itself is collapsed into a single retryable toast; no distinction
/// is made between transport, authorization, and validation failures.
pub async fn delete_chatbot(
    gateway: &impl ChatbotGateway,
    notifier: &impl Notifier,
    chatbot_id: &str,
) -> bool {
    match gateway.delete_chatbot(chatbot_id).await {
        Ok(()) => {
            notifier.notify(ToastMessage::success(
                "Chatbot deleted.",
                "Your chatbot was successfully deleted.",
            ));
            true
        }
        Err(_) => {
            notifier.notify(ToastMessage::destructive(
                "Something went wrong.",
                "Your chatbot was not deleted. Please try again.",
            ));
            false
        }
    }
}

/// Issue the publish POST for a chatbot and notify the user of the outcome.
///
/// Fire-and-forget: no loading state, no refresh, and the returned flag only
/// says the request ran to completion, not that it succeeded.
pub async fn publish_chatbot(
    gateway: &impl ChatbotGateway,
    notifier: &impl Notifier,
    chatbot_id: &str,
) -> bool {
    match gateway.publish_chatbot(chatbot_id).await {
        Ok(()) => {
            notifier.notify(ToastMessage::success(
                "Chatbot published.",
                "Your chatbot was successfully published.",
            ));
        }
        Err(_) => {
            notifier.notify(ToastMessage::destructive(
                "Something went wrong.",
                "Your chatbot was not published. Please try again.",
            ));
        }
    }
    true
}

/// State of the delete confirmation dialog.
///
/// `begin` is the re-entrancy guard: a second confirm while a delete is in
/// flight is refused outright rather than relying on the button's disabled
/// styling alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteDialog {
    open: bool,
    in_progress: bool,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// User picked Delete from the menu: show the dialog.
    pub fn request(&mut self) {
        self.open = true;
    }

    /// User backed out: hide the dialog. No network effect.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// User confirmed. Returns false if a delete is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_progress {
            return false;
        }
        self.in_progress = true;
        true
    }

    /// Delete resolved. Closes the dialog only if it actually succeeded,
    /// leaving a failed dialog open so the user can retry or cancel.
    pub fn finish(&mut self, deleted: bool) {
        self.in_progress = false;
        if deleted {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastLevel;
    use std::cell::RefCell;

    struct FakeGateway {
        fail: bool,
        deletes: RefCell<Vec<String>>,
        publishes: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn ok() -> Self {
            Self {
                fail: false,
                deletes: RefCell::new(Vec::new()),
                publishes: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::ok()
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatbotGateway for FakeGateway {
        async fn delete_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError> {
            self.deletes.borrow_mut().push(chatbot_id.to_string());
            if self.fail {
                Err(ApiError::Http {
                    status: 500,
                    body: String::new(),
                })
            } else {
                Ok(())
            }
        }

        async fn publish_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError> {
            self.publishes.borrow_mut().push(chatbot_id.to_string());
            if self.fail {
                Err(ApiError::Network("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        toasts: RefCell<Vec<ToastMessage>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, toast: ToastMessage) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    /// Drives the dialog the way the action menu does, counting refreshes.
    async fn confirm(
        dialog: &mut DeleteDialog,
        gateway: &FakeGateway,
        notifier: &FakeNotifier,
        chatbot_id: &str,
        refreshes: &mut usize,
    ) {
        if !dialog.begin() {
            return;
        }
        let deleted = delete_chatbot(gateway, notifier, chatbot_id).await;
        dialog.finish(deleted);
        if deleted {
            *refreshes += 1;
        }
    }

    #[tokio::test]
    async fn confirmed_delete_issues_exactly_one_delete_request() {
        let gateway = FakeGateway::ok();
        let notifier = FakeNotifier::default();
        let mut dialog = DeleteDialog::new();
        let mut refreshes = 0;

        dialog.request();
        assert!(dialog.is_open());
        confirm(&mut dialog, &gateway, &notifier, "abc123", &mut refreshes).await;

        assert_eq!(*gateway.deletes.borrow(), vec!["abc123".to_string()]);
        assert!(gateway.publishes.borrow().is_empty());
    }

    #[tokio::test]
    async fn successful_delete_closes_dialog_and_refreshes_once() {
        let gateway = FakeGateway::ok();
        let notifier = FakeNotifier::default();
        let mut dialog = DeleteDialog::new();
        let mut refreshes = 0;

        dialog.request();
        confirm(&mut dialog, &gateway, &notifier, "abc123", &mut refreshes).await;

        assert!(!dialog.is_open());
        assert!(!dialog.is_in_progress());
        assert_eq!(refreshes, 1);

        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Chatbot deleted.");
        assert_eq!(toasts[0].level, ToastLevel::Success);
    }

    #[tokio::test]
    async fn failed_delete_keeps_dialog_open_and_skips_refresh() {
        let gateway = FakeGateway::failing();
        let notifier = FakeNotifier::default();
        let mut dialog = DeleteDialog::new();
        let mut refreshes = 0;

        dialog.request();
        confirm(&mut dialog, &gateway, &notifier, "abc123", &mut refreshes).await;

        assert!(dialog.is_open());
        assert!(!dialog.is_in_progress());
        assert_eq!(refreshes, 0);

        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Something went wrong.");
        assert_eq!(
            toasts[0].description,
            "Your chatbot was not deleted. Please try again."
        );
        assert_eq!(toasts[0].level, ToastLevel::Destructive);
    }

    #[test]
    fn cancel_issues_no_requests() {
        let gateway = FakeGateway::ok();
        let mut dialog = DeleteDialog::new();

        dialog.request();
        dialog.cancel();

        assert!(!dialog.is_open());
        assert!(!dialog.is_in_progress());
        assert!(gateway.deletes.borrow().is_empty());
        assert!(gateway.publishes.borrow().is_empty());
    }

    #[tokio::test]
    async fn publish_posts_once_and_leaves_dialog_untouched() {
        let gateway = FakeGateway::ok();
        let notifier = FakeNotifier::default();
        let dialog = DeleteDialog::new();

        let completed = publish_chatbot(&gateway, &notifier, "abc123").await;

        assert!(completed);
        assert_eq!(*gateway.publishes.borrow(), vec!["abc123".to_string()]);
        assert!(gateway.deletes.borrow().is_empty());
        assert_eq!(dialog, DeleteDialog::new());

        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts[0].title, "Chatbot published.");
    }

    #[tokio::test]
    async fn failed_publish_still_completes_with_error_toast() {
        let gateway = FakeGateway::failing();
        let notifier = FakeNotifier::default();

        let completed = publish_chatbot(&gateway, &notifier, "abc123").await;

        assert!(completed);
        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts[0].title, "Something went wrong.");
        assert_eq!(
            toasts[0].description,
            "Your chatbot was not published. Please try again."
        );
    }

    #[test]
    fn begin_refuses_reentrant_confirm() {
        let mut dialog = DeleteDialog::new();
        dialog.request();

        assert!(dialog.begin());
        assert!(!dialog.begin());

        dialog.finish(false);
        assert!(dialog.begin());
    }
}
