//! One-time page setup
//!
//! Process-wide side effects of the first mount: inject the web font
//! stylesheet and set the document title. Runs at most once per page view.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;

/// Element id of the injected font stylesheet
pub const FONT_ELEMENT_ID: &str = "inter-font";

/// The bits of the document the setup step touches.
pub trait DocumentHost {
    fn has_element(&self, id: &str) -> bool;
    fn append_stylesheet(&mut self, id: &str, href: &str);
    fn set_title(&mut self, title: &str);
}

#[derive(Debug)]
pub struct PageSetup {
    done: AtomicBool,
    font_stylesheet_url: String,
    page_title: String,
}

impl PageSetup {
    pub fn new(config: &Config) -> Self {
        Self {
            done: AtomicBool::new(false),
            font_stylesheet_url: config.font_stylesheet_url.clone(),
            page_title: config.page_title.clone(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    /// Apply the setup to `host`. Returns `false` if it already ran.
    pub fn run(&self, host: &mut impl DocumentHost) -> bool {
        if self.done.swap(true, Ordering::SeqCst) {
            return false;
        }

        if host.has_element(FONT_ELEMENT_ID) {
            tracing::debug!("Font stylesheet already present");
        } else {
            host.append_stylesheet(FONT_ELEMENT_ID, &self.font_stylesheet_url);
        }
        host.set_title(&self.page_title);

        tracing::info!(title = %self.page_title, "Page setup complete");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDocument {
        stylesheets: HashMap<String, String>,
        title: Option<String>,
        appends: usize,
    }

    impl DocumentHost for FakeDocument {
        fn has_element(&self, id: &str) -> bool {
            self.stylesheets.contains_key(id)
        }

        fn append_stylesheet(&mut self, id: &str, href: &str) {
            self.appends += 1;
            self.stylesheets.insert(id.to_string(), href.to_string());
        }

        fn set_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }
    }

    #[test]
    fn test_runs_once() {
        let setup = PageSetup::new(&Config::default());
        let mut doc = FakeDocument::default();

        assert!(setup.run(&mut doc));
        assert!(!setup.run(&mut doc));

        assert!(setup.is_done());
        assert_eq!(doc.appends, 1);
        assert_eq!(
            doc.title.as_deref(),
            Some("Falcon View Group — Strategy & Software")
        );
        assert!(doc.stylesheets[FONT_ELEMENT_ID].contains("family=Inter"));
    }

    #[test]
    fn test_existing_stylesheet_not_duplicated() {
        let setup = PageSetup::new(&Config::default());
        let mut doc = FakeDocument::default();
        doc.stylesheets
            .insert(FONT_ELEMENT_ID.to_string(), "cached.css".to_string());

        setup.run(&mut doc);

        assert_eq!(doc.appends, 0);
        assert_eq!(doc.stylesheets[FONT_ELEMENT_ID], "cached.css");
        assert!(doc.title.is_some());
    }
}
