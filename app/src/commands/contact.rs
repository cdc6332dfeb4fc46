//! Contact form commands
use serde::{Deserialize, Serialize};

use falcon_core::{EmailRelay, FormFields, FormView, SubmitOutcome};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactFormInfo {
    pub fields: FormFields,
    pub status: String,
    pub error_message: Option<String>,
    pub feedback: String,
    pub button_label: String,
    pub button_enabled: bool,
    /// Outcome of the submit that produced this snapshot, if any
    pub outcome: Option<SubmitOutcome>,
}

impl From<FormView> for ContactFormInfo {
    fn from(view: FormView) -> Self {
        Self {
            fields: view.fields,
            status: view.status.as_str().to_string(),
            error_message: view.error_message,
            feedback: view.feedback,
            button_label: view.button_label,
            button_enabled: view.button_enabled,
            outcome: None,
        }
    }
}

pub fn get_contact_form<R: EmailRelay>(state: &AppState<R>) -> CommandResult<ContactFormInfo> {
    CommandResult::ok(state.contact_form().view().into())
}

/// Mirror the values currently typed into the form.
pub fn update_contact_fields<R: EmailRelay>(
    state: &AppState<R>,
    fields: FormFields,
) -> CommandResult<ContactFormInfo> {
    let form = state.contact_form();
    form.set_fields(fields);
    CommandResult::ok(form.view().into())
}

pub async fn submit_contact<R: EmailRelay>(
    state: &AppState<R>,
    fields: FormFields,
) -> CommandResult<ContactFormInfo> {
    let form = state.contact_form();
    match form.submit(fields).await {
        Ok(outcome) => {
            let mut info = ContactFormInfo::from(form.view());
            info.outcome = Some(outcome);
            CommandResult::ok(info)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
