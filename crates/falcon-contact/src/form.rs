//! Contact form
//!
//! Owns the visible field values and the submission status. Cloning a form
//! shares its state, so a host can hold one handle for rendering while
//! another awaits a submit.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ContactError;
use crate::relay::{EmailRelay, RelayCredentials, RelayRequest};
use crate::status::SubmitStatus;
use crate::submission::{ContactSubmission, FormFields};
use crate::Result;

/// Feedback shown after a successful send
pub const SENT_MESSAGE: &str = "Thanks — we’ll be in touch shortly.";

/// Fixed configuration of a form instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    pub credentials: RelayCredentials,
    /// Address every message is delivered to
    pub destination_email: String,
}

impl FormSettings {
    /// The one message users see for any relay failure.
    pub fn failure_message(&self) -> String {
        format!(
            "Something went wrong. Please try again or email {}.",
            self.destination_email
        )
    }

    pub fn hint_message(&self) -> String {
        format!("Goes to {}", self.destination_email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Relay accepted the message
    Sent,
    /// Relay call failed; the error message is set
    Failed,
    /// A send was already in flight; nothing happened
    Skipped,
}

/// Render-facing snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub fields: FormFields,
    pub status: SubmitStatus,
    pub error_message: Option<String>,
    pub feedback: String,
    pub button_label: String,
    pub button_enabled: bool,
}

#[derive(Debug, Default)]
struct FormState {
    fields: FormFields,
    status: SubmitStatus,
    /// Present only while status is `Error`
    error_message: Option<String>,
}

impl FormState {
    fn transition_to(&mut self, target: SubmitStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(ContactError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }

        tracing::debug!(from = %self.status, to = %target, "Contact form state transition");
        self.status = target;
        Ok(())
    }
}

/// Restores a usable form if a submit is abandoned mid-send.
///
/// Armed once the form enters `Sending`. If the submit future is dropped
/// before the relay settles, the form moves to `Error` with the retry
/// message so the submit control is enabled again.
struct SendGuard<'a> {
    state: &'a RwLock<FormState>,
    settings: &'a FormSettings,
    submission_id: &'a str,
    armed: bool,
}

impl SendGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SendGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut state = self.state.write();
        if state.status != SubmitStatus::Sending {
            return;
        }
        if state.transition_to(SubmitStatus::Error).is_ok() {
            state.error_message = Some(self.settings.failure_message());
            tracing::warn!(
                submission_id = %self.submission_id,
                "Submit abandoned before the relay settled"
            );
        }
    }
}

pub struct ContactForm<R> {
    relay: Arc<R>,
    settings: Arc<FormSettings>,
    state: Arc<RwLock<FormState>>,
}

impl<R: EmailRelay> ContactForm<R> {
    pub fn new(relay: R, settings: FormSettings) -> Self {
        Self::with_shared_relay(Arc::new(relay), settings)
    }

    pub fn with_shared_relay(relay: Arc<R>, settings: FormSettings) -> Self {
        Self {
            relay,
            settings: Arc::new(settings),
            state: Arc::new(RwLock::new(FormState::default())),
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn status(&self) -> SubmitStatus {
        self.state.read().status
    }

    pub fn fields(&self) -> FormFields {
        self.state.read().fields.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.read().error_message.clone()
    }

    /// Mirror what the user typed. Does not touch the status.
    pub fn set_fields(&self, fields: FormFields) {
        self.state.write().fields = fields;
    }

    pub fn view(&self) -> FormView {
        let state = self.state.read();
        let feedback = match (&state.status, &state.error_message) {
            (SubmitStatus::Sent, _) => SENT_MESSAGE.to_string(),
            (SubmitStatus::Error, Some(message)) => message.clone(),
            _ => self.settings.hint_message(),
        };

        FormView {
            fields: state.fields.clone(),
            status: state.status,
            error_message: state.error_message.clone(),
            feedback,
            button_label: state.status.button_label().to_string(),
            button_enabled: state.status.accepts_submit(),
        }
    }

    /// Submit the form with the values currently in its inputs.
    ///
    /// Makes exactly one relay call. While a call is in flight further
    /// submits return [`SubmitOutcome::Skipped`] without side effects.
    /// Invalid input returns an error and leaves the form untouched. On
    /// success the fields are cleared; on failure they are kept and a fixed
    /// retry message is set. Dropping the returned future mid-send counts
    /// as a failure.
    pub async fn submit(&self, fields: FormFields) -> Result<SubmitOutcome> {
        let (submission, request) = {
            let mut state = self.state.write();
            if !state.status.accepts_submit() {
                tracing::debug!("Submit ignored, a send is already in flight");
                return Ok(SubmitOutcome::Skipped);
            }

            let submission = ContactSubmission::from_fields(&fields)?;
            let payload = submission.to_payload(&self.settings.destination_email);
            let request = RelayRequest::new(&self.settings.credentials, payload);

            state.transition_to(SubmitStatus::Sending)?;
            state.error_message = None;
            state.fields = fields;

            (submission, request)
        };

        tracing::info!(
            submission_id = %submission.id,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            interest = ?submission.interest,
            "Sending contact submission"
        );

        let guard = SendGuard {
            state: &self.state,
            settings: &self.settings,
            submission_id: &submission.id,
            armed: true,
        };
        let result = self.relay.send(request).await;
        guard.disarm();

        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.transition_to(SubmitStatus::Sent)?;
                state.fields = FormFields::default();
                tracing::info!(submission_id = %submission.id, "Contact submission sent");
                Ok(SubmitOutcome::Sent)
            }
            Err(err) => {
                state.transition_to(SubmitStatus::Error)?;
                state.error_message = Some(self.settings.failure_message());
                tracing::error!(
                    submission_id = %submission.id,
                    error = %err,
                    "Relay send failed"
                );
                Ok(SubmitOutcome::Failed)
            }
        }
    }
}

impl<R> Clone for ContactForm<R> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
            settings: Arc::clone(&self.settings),
            state: Arc::clone(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RelayError, ValidationError};
    use parking_lot::Mutex;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Relay with a scripted outcome, optionally held until released.
    #[derive(Default)]
    struct ScriptedRelay {
        fail: bool,
        hang: bool,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
        requests: Mutex<Vec<RelayRequest>>,
    }

    impl ScriptedRelay {
        fn resolving() -> Self {
            Self::default()
        }

        fn rejecting() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn never_settling() -> Self {
            Self {
                hang: true,
                ..Default::default()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EmailRelay for ScriptedRelay {
        fn send(
            &self,
            request: RelayRequest,
        ) -> impl Future<Output = std::result::Result<(), RelayError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().push(request);
            let fail = self.fail;
            let hang = self.hang;
            let gate = self.gate.clone();

            async move {
                if hang {
                    std::future::pending::<()>().await;
                }
                match gate {
                    Some(gate) => gate.notified().await,
                    None => tokio::task::yield_now().await,
                }
                if fail {
                    Err(RelayError::Rejected {
                        status: 412,
                        body: "The Public Key is invalid".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    fn settings() -> FormSettings {
        FormSettings {
            credentials: RelayCredentials {
                service_id: "service_test".to_string(),
                template_id: "template_test".to_string(),
                public_key: "public_test".to_string(),
            },
            destination_email: "info@falconviewgroup.io".to_string(),
        }
    }

    fn jane() -> FormFields {
        FormFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_view() {
        let form = ContactForm::new(ScriptedRelay::resolving(), settings());
        let view = form.view();

        assert_eq!(view.status, SubmitStatus::Idle);
        assert_eq!(view.error_message, None);
        assert_eq!(view.feedback, "Goes to info@falconviewgroup.io");
        assert_eq!(view.button_label, "Send");
        assert!(view.button_enabled);
    }

    #[tokio::test]
    async fn test_submit_success_clears_fields() {
        let form = ContactForm::new(ScriptedRelay::resolving(), settings());
        form.set_fields(jane());

        let outcome = form.submit(jane()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert!(form.fields().is_empty());
        assert_eq!(form.error_message(), None);
        assert_eq!(form.view().feedback, SENT_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_sends_template_payload() {
        let relay = Arc::new(ScriptedRelay::resolving());
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let mut fields = jane();
        fields.company = " Acme ".to_string();
        fields.interest = "Niche SaaS".to_string();
        form.submit(fields).await.unwrap();

        let requests = relay.requests.lock();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.service_id, "service_test");
        assert_eq!(request.template_id, "template_test");
        assert_eq!(request.public_key, "public_test");
        assert_eq!(request.payload.from_name, "Jane");
        assert_eq!(request.payload.from_email, "jane@x.com");
        assert_eq!(request.payload.company, "Acme");
        assert_eq!(request.payload.interest, "Niche SaaS");
        assert_eq!(request.payload.message, "Hello");
        assert_eq!(request.payload.to_email, "info@falconviewgroup.io");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields() {
        let form = ContactForm::new(ScriptedRelay::rejecting(), settings());

        let outcome = form.submit(jane()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(
            form.error_message().as_deref(),
            Some("Something went wrong. Please try again or email info@falconviewgroup.io.")
        );
        assert_eq!(form.fields(), jane());
        assert!(form.view().button_enabled);
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let form = ContactForm::new(ScriptedRelay::rejecting(), settings());
        form.submit(jane()).await.unwrap();
        assert_eq!(form.status(), SubmitStatus::Error);

        let succeeding = ContactForm {
            relay: Arc::new(ScriptedRelay::resolving()),
            settings: Arc::clone(&form.settings),
            state: Arc::clone(&form.state),
        };
        let outcome = succeeding.submit(jane()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form.error_message(), None);
        assert_eq!(form.status(), SubmitStatus::Sent);
    }

    #[tokio::test]
    async fn test_invalid_submit_changes_nothing() {
        let relay = Arc::new(ScriptedRelay::resolving());
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let mut fields = jane();
        fields.email = "jane".to_string();
        let err = form.submit(fields).await.unwrap_err();

        assert!(matches!(
            err,
            ContactError::Validation(ValidationError::MalformedEmail(_))
        ));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_second_submit_while_sending_is_skipped() {
        let relay = Arc::new(ScriptedRelay::resolving());
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let (first, second) = tokio::join!(form.submit(jane()), form.submit(jane()));

        assert_eq!(first.unwrap(), SubmitOutcome::Sent);
        assert_eq!(second.unwrap(), SubmitOutcome::Skipped);
        assert_eq!(relay.calls(), 1);
    }

    #[tokio::test]
    async fn test_sending_disables_button_until_relay_settles() {
        let gate = Arc::new(Notify::new());
        let relay = Arc::new(ScriptedRelay::gated(Arc::clone(&gate)));
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let in_flight = {
            let form = form.clone();
            tokio::spawn(async move { form.submit(jane()).await })
        };

        while form.status() != SubmitStatus::Sending {
            tokio::task::yield_now().await;
        }

        let view = form.view();
        assert!(!view.button_enabled);
        assert_eq!(view.button_label, "Sending…");
        assert_eq!(view.feedback, "Goes to info@falconviewgroup.io");

        let mut other = jane();
        other.message = "Second try".to_string();
        assert_eq!(form.submit(other).await.unwrap(), SubmitOutcome::Skipped);
        assert_eq!(relay.calls(), 1);
        // The skipped submit did not overwrite the in-flight values
        assert_eq!(form.fields(), jane());

        gate.notify_one();
        let outcome = in_flight.await.unwrap().unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(relay.calls(), 1);
    }

    #[tokio::test]
    async fn test_abandoned_submit_reenables_form() {
        let relay = Arc::new(ScriptedRelay::never_settling());
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let abandoned = tokio::time::timeout(Duration::from_millis(10), form.submit(jane())).await;
        assert!(abandoned.is_err());

        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(
            form.error_message().as_deref(),
            Some("Something went wrong. Please try again or email info@falconviewgroup.io.")
        );
        assert_eq!(form.fields(), jane());
        assert!(form.view().button_enabled);

        // The next submit reaches the relay instead of being skipped
        let retry = tokio::time::timeout(Duration::from_millis(10), form.submit(jane())).await;
        assert!(retry.is_err());
        assert_eq!(relay.calls(), 2);
    }

    #[tokio::test]
    async fn test_whitespace_only_message_is_sent() {
        let relay = Arc::new(ScriptedRelay::resolving());
        let form = ContactForm::with_shared_relay(Arc::clone(&relay), settings());

        let mut fields = jane();
        fields.message = "   ".to_string();
        let outcome = form.submit(fields).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.calls(), 1);
        assert_eq!(relay.requests.lock()[0].payload.message, "");
    }
}
