//! Falcon View Group landing page - host bridge
//!
//! The web host forwards DOM events (tab hover/click, layout reports, form
//! submits) to these commands and renders the returned snapshots. Rust owns
//! the state; the page only draws it.

pub mod commands;
mod state;

pub use state::{AnchorRegistry, AppState};

/// Initialize logging and build the application state from the environment.
pub fn start() -> falcon_core::Result<AppState> {
    falcon_core::init_logging();

    let state = AppState::new()?;

    tracing::info!("Falcon View landing page started");

    Ok(state)
}
