//! Application state management
use falcon_core::{
    AnchorScroller, Config, ContactForm, DocumentHost, EmailJsRelay, EmailRelay, LandingPage,
    MeasuredLayout, Result, ScrollBehavior, TabIndicator,
};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Anchors the page currently renders.
///
/// The host registers ids after each render; a scroll to an unregistered id
/// is skipped.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    present: HashSet<String>,
    last_scroll: Option<(String, ScrollBehavior)>,
}

impl AnchorRegistry {
    pub fn replace<I, S>(&mut self, anchors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.present = anchors.into_iter().map(Into::into).collect();
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.present.contains(anchor)
    }

    /// Scroll requested by the last click, to be performed by the host
    pub fn take_scroll(&mut self) -> Option<(String, ScrollBehavior)> {
        self.last_scroll.take()
    }
}

impl AnchorScroller for AnchorRegistry {
    fn scroll_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) -> bool {
        if !self.present.contains(anchor) {
            return false;
        }
        self.last_scroll = Some((anchor.to_string(), behavior));
        true
    }
}

/// Thread-safe application state wrapper
pub struct AppState<R = EmailJsRelay> {
    page: Arc<RwLock<LandingPage<R>>>,
    layout: Arc<RwLock<MeasuredLayout>>,
    anchors: Arc<RwLock<AnchorRegistry>>,
}

impl AppState<EmailJsRelay> {
    pub fn new() -> Result<Self> {
        let config = Config::from_env();
        let page = LandingPage::from_config(config)?;
        Ok(Self::from_page(page))
    }
}

impl<R: EmailRelay> AppState<R> {
    pub fn from_page(page: LandingPage<R>) -> Self {
        Self {
            page: Arc::new(RwLock::new(page)),
            layout: Arc::new(RwLock::new(MeasuredLayout::new())),
            anchors: Arc::new(RwLock::new(AnchorRegistry::default())),
        }
    }

    /// Run the one-time document setup against `host`.
    pub fn initialize(&self, host: &mut impl DocumentHost) -> bool {
        self.page.read().initialize(host)
    }

    pub fn with_page<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&LandingPage<R>) -> T,
    {
        f(&*self.page.read())
    }

    /// Run `f` against the tab engine with the latest measurements and the
    /// registered anchors.
    pub fn with_tabs<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TabIndicator, &MeasuredLayout, &mut AnchorRegistry) -> T,
    {
        let mut page = self.page.write();
        let layout = self.layout.read();
        let mut anchors = self.anchors.write();
        f(page.tabs_mut(), &*layout, &mut *anchors)
    }

    pub fn update_layout<F>(&self, f: F)
    where
        F: FnOnce(&mut MeasuredLayout),
    {
        f(&mut *self.layout.write());
    }

    pub fn register_anchors(&self, anchors: Vec<String>) {
        self.anchors.write().replace(anchors);
    }

    /// A handle to the contact form that can be awaited on without holding
    /// any lock on the page.
    pub fn contact_form(&self) -> ContactForm<R> {
        self.page.read().contact().clone()
    }
}
