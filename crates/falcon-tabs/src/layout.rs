//! Layout probe
//!
//! Reads where a rendered tab sits inside its container. The probe is the
//! only window the indicator engine has onto the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Horizontal placement of an indicator, in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRect {
    pub offset: f64,
    pub width: f64,
}

impl IndicatorRect {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// A rect is drawable only when both coordinates are finite and the
    /// width is not negative.
    pub fn is_drawable(&self) -> bool {
        self.offset.is_finite() && self.width.is_finite() && self.width >= 0.0
    }
}

/// Measures a tab element by index.
///
/// Returns `None` when the element is not mounted (or not measurable); the
/// caller keeps whatever geometry it had before.
pub trait LayoutProbe {
    fn measure(&self, index: usize) -> Option<IndicatorRect>;
}

impl<P: LayoutProbe + ?Sized> LayoutProbe for &P {
    fn measure(&self, index: usize) -> Option<IndicatorRect> {
        (**self).measure(index)
    }
}

/// Last measurements reported by the rendering layer.
///
/// Hosts that cannot be queried synchronously push each tab's bounding box
/// here after layout, and the indicator engine reads it back as a probe.
#[derive(Debug, Clone, Default)]
pub struct MeasuredLayout {
    rects: HashMap<usize, IndicatorRect>,
}

impl MeasuredLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the geometry of tab `index`. Non-drawable values are dropped
    /// so the tab reads as unmeasured.
    pub fn record(&mut self, index: usize, rect: IndicatorRect) {
        if rect.is_drawable() {
            self.rects.insert(index, rect);
        } else {
            tracing::warn!(tab_index = index, ?rect, "Ignoring non-finite tab geometry");
            self.rects.remove(&index);
        }
    }

    /// Forget tab `index` (element unmounted).
    pub fn forget(&mut self, index: usize) {
        self.rects.remove(&index);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl LayoutProbe for MeasuredLayout {
    fn measure(&self, index: usize) -> Option<IndicatorRect> {
        self.rects.get(&index).copied()
    }
}
