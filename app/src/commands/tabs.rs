//! Tab navigation commands
use serde::{Deserialize, Serialize};

use falcon_core::{EmailRelay, IndicatorRect, TabIndicator, TabView};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabBarInfo {
    pub tabs: Vec<TabView>,
    pub active_index: usize,
    pub hovered_index: Option<usize>,
    pub active_rect: IndicatorRect,
    pub hover_rect: Option<IndicatorRect>,
    pub hover_opacity: f32,
}

impl From<&TabIndicator> for TabBarInfo {
    fn from(tabs: &TabIndicator) -> Self {
        Self {
            tabs: tabs.tabs(),
            active_index: tabs.active_index(),
            hovered_index: tabs.hovered_index(),
            active_rect: tabs.active_rect(),
            hover_rect: tabs.hover_rect(),
            hover_opacity: tabs.hover_opacity(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TabClickInfo {
    pub bar: TabBarInfo,
    pub anchor: String,
    /// Anchor the host should scroll to; absent when it is not in the page
    pub scroll_to: Option<String>,
    pub behavior: Option<String>,
}

/// Bounding box of one rendered tab, relative to the tab bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TabMeasurement {
    pub index: usize,
    pub offset: f64,
    pub width: f64,
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Replace the stored tab geometry with a fresh layout report and re-align
/// the indicators.
pub fn report_tab_layout<R: EmailRelay>(
    state: &AppState<R>,
    measurements: Vec<TabMeasurement>,
) -> CommandResult<TabBarInfo> {
    state.update_layout(|layout| {
        layout.clear();
        for m in &measurements {
            layout.record(m.index, IndicatorRect::new(m.offset, m.width));
        }
    });

    let info = state.with_tabs(|tabs, layout, _| {
        if tabs.is_mounted() {
            tabs.remeasure(layout);
        }
        TabBarInfo::from(&*tabs)
    });
    CommandResult::ok(info)
}

pub fn register_anchors<R: EmailRelay>(
    state: &AppState<R>,
    anchors: Vec<String>,
) -> CommandResult<()> {
    state.register_anchors(anchors);
    CommandResult::ok(())
}

/// First layout of the tab bar is complete.
pub fn mount_tab_bar<R: EmailRelay>(state: &AppState<R>) -> CommandResult<TabBarInfo> {
    let info = state.with_tabs(|tabs, layout, _| {
        tabs.on_mount(layout);
        TabBarInfo::from(&*tabs)
    });
    CommandResult::ok(info)
}

pub fn hover_tab<R: EmailRelay>(state: &AppState<R>, index: usize) -> CommandResult<TabBarInfo> {
    match state.with_tabs(|tabs, layout, _| {
        tabs.on_hover(index, layout)?;
        Ok::<_, falcon_core::TabError>(TabBarInfo::from(&*tabs))
    }) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn leave_tab<R: EmailRelay>(state: &AppState<R>) -> CommandResult<TabBarInfo> {
    let info = state.with_tabs(|tabs, _, _| {
        tabs.on_hover_exit();
        TabBarInfo::from(&*tabs)
    });
    CommandResult::ok(info)
}

pub fn click_tab<R: EmailRelay>(state: &AppState<R>, index: usize) -> CommandResult<TabClickInfo> {
    match state.with_tabs(|tabs, layout, anchors| {
        let click = tabs.on_click(index, layout, anchors)?;
        let scroll = anchors.take_scroll();
        Ok::<_, falcon_core::TabError>(TabClickInfo {
            bar: TabBarInfo::from(&*tabs),
            anchor: click.anchor,
            scroll_to: scroll.as_ref().map(|(anchor, _)| anchor.clone()),
            behavior: scroll.map(|(_, behavior)| behavior.as_str().to_string()),
        })
    }) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_tab_bar<R: EmailRelay>(state: &AppState<R>) -> CommandResult<TabBarInfo> {
    CommandResult::ok(state.with_page(|page| TabBarInfo::from(page.tabs())))
}
