//! Contact submission handling.
//!
//! Validates the form on the UI thread, then spawns a tokio task that posts
//! it to the relay and reports back through the action channel.

use std::sync::Arc;

use folio_core::contact::{ContactController, Notice};
use log::info;

use crate::action::AppAction;
use crate::service::{RelayStatus, deliver};

use super::App;

impl App {
    /// Start a background submission if the form is valid and none is pending.
    pub(super) fn submit_contact(&mut self) {
        let payload = match self.contact.begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                self.notice = Some(ContactController::rejection_notice(&e));
                return;
            }
        };

        let relay = match &self.relay {
            Some(relay) => Arc::clone(relay),
            None => {
                let reason = match &self.relay_status {
                    RelayStatus::Unavailable(reason) => reason.clone(),
                    RelayStatus::Ready(_) => "relay not initialized".to_string(),
                };
                // Release the guard; the form is kept for a later attempt
                let notice = self.contact.settle(&Err::<(), _>(&reason));
                self.notice = Some(Notice::error(format!("{} ({})", notice.message, reason)));
                return;
            }
        };

        self.status_bar.set_message("Sending message...");
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = deliver(relay, payload).await;
            let _ = tx.send(AppAction::ContactSettled(result));
        });
    }

    /// Apply the outcome of a background submission.
    pub(super) fn handle_contact_settled(&mut self, result: Result<(), String>) {
        let notice = self.contact.settle(&result);
        if result.is_ok() {
            info!("contact message delivered");
            self.editor.end();
        }
        self.status_bar.set_message("");
        self.notice = Some(notice);
    }
}
