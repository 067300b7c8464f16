//! Page switching and fragment persistence
//!
//! Exactly one page is visible at a time. An unknown key is reported as
//! [`DashError::UnknownPage`] and leaves the current page in place. Every
//! successful navigation yields the fragment to persist so the next start
//! lands on the same page.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DashError, Result, ResultExt};
use crate::page::{Page, PageHeader};

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new(initial: Page) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn header(&self) -> PageHeader {
        self.current.header()
    }

    /// Whether `page` is the active navigation entry
    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn navigate_to(&mut self, page: Page) -> Page {
        if page != self.current {
            debug!(from = %self.current, to = %page, "navigate");
        }
        self.current = page;
        page
    }

    /// Navigate by page key. An unknown key leaves the page unchanged.
    pub fn navigate(&mut self, key: &str) -> Result<Page> {
        let page = Page::from_key(key).ok_or_else(|| DashError::UnknownPage(key.to_string()))?;
        Ok(self.navigate_to(page))
    }

    /// Apply an externally changed fragment such as `#rag`
    pub fn on_fragment_change(&mut self, fragment: &str) -> Result<Page> {
        let key = fragment.trim();
        self.navigate(key.strip_prefix('#').unwrap_or(key))
    }

    pub fn next(&mut self) -> Page {
        self.navigate_to(self.current.next())
    }

    pub fn previous(&mut self) -> Page {
        self.navigate_to(self.current.previous())
    }
}

/// File holding the last page fragment between runs
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored fragment, if the file exists
    pub fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    /// Stored page; an unreadable file or unknown fragment yields `None`
    pub fn restore(&self) -> Option<Page> {
        match self.load() {
            Ok(Some(fragment)) => {
                let page = Page::from_fragment(&fragment);
                if page.is_none() {
                    debug!(fragment, "stored fragment names no page");
                }
                page
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not restore session");
                None
            }
        }
    }

    pub fn save(&self, page: Page) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&self.path, page.fragment())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}
