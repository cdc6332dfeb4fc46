//! Tab indicator engine
//!
//! Tracks the active and hovered tab and keeps the two overlays aligned with
//! the measured tab geometry:
//! ```text
//! hover(i)   -> hovered = i, hover rect = measure(i)
//! leave      -> hovered = none (rect kept, opacity 0)
//! click(i)   -> active = i, active rect = measure(i), scroll to anchor
//! mount      -> active rect = measure(0)
//! ```

use serde::{Deserialize, Serialize};

use crate::anchor::{anchor_for_label, AnchorScroller, ScrollBehavior};
use crate::error::TabError;
use crate::layout::{IndicatorRect, LayoutProbe};
use crate::Result;

/// Labels of the landing page navigation, in display order.
pub const DEFAULT_LABELS: [&str; 3] = ["How we help", "About", "Contact"];

/// Result of a tab click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabClick {
    pub index: usize,
    /// Anchor the click navigates to
    pub anchor: String,
    /// Whether the anchor existed and was scrolled into view
    pub scrolled: bool,
}

/// Render-facing snapshot of a single tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabView {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone)]
pub struct TabIndicator {
    /// Fixed at construction
    labels: Vec<String>,
    /// Exactly one tab is active
    active_index: usize,
    /// Set only while the pointer is over a tab
    hovered_index: Option<usize>,
    /// Last measured hover geometry, kept after the pointer leaves
    hover_rect: Option<IndicatorRect>,
    /// Last measured geometry of the active tab
    active_rect: IndicatorRect,
    /// First layout has been observed
    mounted: bool,
}

impl TabIndicator {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(TabError::NoTabs);
        }

        Ok(Self {
            labels,
            active_index: 0,
            hovered_index: None,
            hover_rect: None,
            active_rect: IndicatorRect::default(),
            mounted: false,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn active_rect(&self) -> IndicatorRect {
        self.active_rect
    }

    /// Last hover geometry. Still returned after the pointer leaves; use
    /// [`hover_opacity`](Self::hover_opacity) to decide whether to draw it.
    pub fn hover_rect(&self) -> Option<IndicatorRect> {
        self.hover_rect
    }

    /// Opacity of the hover highlight: 1 while a tab is hovered, else 0.
    pub fn hover_opacity(&self) -> f32 {
        if self.hovered_index.is_some() {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn tabs(&self) -> Vec<TabView> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| TabView {
                index,
                label: label.clone(),
                active: index == self.active_index,
                hovered: self.hovered_index == Some(index),
            })
            .collect()
    }

    /// First layout completed: size the underline to tab 0 so it never shows
    /// with zero width. Later calls are no-ops; returns whether it ran.
    ///
    /// If tab 0 cannot be measured yet the engine still counts as mounted and
    /// keeps the zero-width underline; call [`remeasure`](Self::remeasure)
    /// once geometry is available.
    pub fn on_mount(&mut self, probe: &impl LayoutProbe) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        if let Some(rect) = measure(probe, 0) {
            self.active_rect = rect;
        }

        tracing::debug!(active_rect = ?self.active_rect, "Tab bar mounted");
        true
    }

    /// Pointer entered tab `index`.
    pub fn on_hover(&mut self, index: usize, probe: &impl LayoutProbe) -> Result<()> {
        self.check_index(index)?;
        self.hovered_index = Some(index);

        if let Some(rect) = measure(probe, index) {
            self.hover_rect = Some(rect);
        }

        Ok(())
    }

    /// Pointer left the hovered tab. The hover rect is kept so a quick
    /// re-entry does not animate from zero.
    pub fn on_hover_exit(&mut self) {
        self.hovered_index = None;
    }

    /// Select tab `index` and scroll its section into view.
    ///
    /// A missing section only skips the scroll; the selection still moves.
    pub fn on_click(
        &mut self,
        index: usize,
        probe: &impl LayoutProbe,
        scroller: &mut impl AnchorScroller,
    ) -> Result<TabClick> {
        self.check_index(index)?;

        tracing::debug!(from = self.active_index, to = index, "Tab selection change");
        self.active_index = index;

        if let Some(rect) = measure(probe, index) {
            self.active_rect = rect;
        }

        let anchor = anchor_for_label(&self.labels[index]);
        let scrolled = scroller.scroll_into_view(&anchor, ScrollBehavior::Smooth);
        if !scrolled {
            tracing::debug!(anchor = %anchor, "Anchor not in document, skipping scroll");
        }

        tracing::info!(tab_index = index, anchor = %anchor, "Tab clicked");

        Ok(TabClick {
            index,
            anchor,
            scrolled,
        })
    }

    /// Re-read geometry after a reflow (resize, font swap).
    pub fn remeasure(&mut self, probe: &impl LayoutProbe) {
        if let Some(rect) = measure(probe, self.active_index) {
            self.active_rect = rect;
        }
        if let Some(index) = self.hovered_index {
            if let Some(rect) = measure(probe, index) {
                self.hover_rect = Some(rect);
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.labels.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                len: self.labels.len(),
            });
        }
        Ok(())
    }
}

impl Default for TabIndicator {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            active_index: 0,
            hovered_index: None,
            hover_rect: None,
            active_rect: IndicatorRect::default(),
            mounted: false,
        }
    }
}

/// Probe a tab, discarding geometry that cannot be drawn.
fn measure(probe: &impl LayoutProbe, index: usize) -> Option<IndicatorRect> {
    match probe.measure(index) {
        Some(rect) if rect.is_drawable() => Some(rect),
        Some(rect) => {
            tracing::warn!(tab_index = index, ?rect, "Discarding undrawable tab geometry");
            None
        }
        None => {
            tracing::warn!(tab_index = index, "Tab element not mounted, keeping previous geometry");
            None
        }
    }
}
