//! Page lifecycle commands
use serde::{Deserialize, Serialize};

use falcon_core::EmailRelay;

use super::contact::{get_contact_form, ContactFormInfo};
use super::tabs::{get_tab_bar, CommandResult, TabBarInfo};
use crate::state::AppState;

/// Everything the page needs for its first paint
#[derive(Debug, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub tab_bar: TabBarInfo,
    pub contact: ContactFormInfo,
}

/// The page script has loaded; hand it the current tab bar and form state.
pub fn frontend_ready<R: EmailRelay>(state: &AppState<R>) -> CommandResult<PageSnapshot> {
    tracing::info!("Frontend ready");

    match (get_tab_bar(state).data, get_contact_form(state).data) {
        (Some(tab_bar), Some(contact)) => CommandResult::ok(PageSnapshot { tab_bar, contact }),
        _ => CommandResult::err("Page state unavailable".to_string()),
    }
}
