//! Section anchors
//!
//! Each tab label maps to the id of the page section it scrolls to.

use serde::{Deserialize, Serialize};

/// Anchor at the very top of the page.
pub const TOP_ANCHOR: &str = "top";

/// Anchors the page shell renders.
pub const ANCHOR_IDS: [&str; 4] = [TOP_ANCHOR, "help", "about", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Scrolls a section into view.
///
/// Returns `false` when no element carries the anchor id; callers treat that
/// as a skipped scroll, not a failure.
pub trait AnchorScroller {
    fn scroll_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) -> bool;
}

/// Map a tab label to its anchor id.
///
/// Labels are lower-cased and whitespace runs become `-`; `how-we-help` is
/// shortened to `help`.
pub fn anchor_for_label(label: &str) -> String {
    let kebab = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if kebab == "how-we-help" {
        "help".to_string()
    } else {
        kebab
    }
}
