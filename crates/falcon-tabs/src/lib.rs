//! Falcon View Tab Navigation
//!
//! A fixed row of tabs with two overlays drawn against the live layout:
//! a translucent hover highlight and a thin underline under the active tab.
//! Geometry is never computed here; it is read through [`LayoutProbe`] so
//! the host decides how tabs are measured.

mod anchor;
mod error;
mod indicator;
mod layout;

pub use anchor::{anchor_for_label, AnchorScroller, ScrollBehavior, ANCHOR_IDS, TOP_ANCHOR};
pub use error::TabError;
pub use indicator::{TabClick, TabIndicator, TabView, DEFAULT_LABELS};
pub use layout::{IndicatorRect, LayoutProbe, MeasuredLayout};

pub type Result<T> = std::result::Result<T, TabError>;
