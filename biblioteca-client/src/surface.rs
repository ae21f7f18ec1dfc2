//! Output side of the UI: where rendered pages go

use biblioteca_core::PageView;
use std::sync::{Mutex, PoisonError};

/// Receives every rendered page
pub trait Surface: Send + Sync {
    /// Replace what is displayed with `page`
    fn render(&self, page: &PageView);

    /// Bring the form section into view
    fn scroll_to_form(&self) {}
}

/// Keeps every rendered page, for headless hosts and tests
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inner: Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    pages: Vec<PageView>,
    scrolls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_page(&self) -> Option<PageView> {
        self.lock().pages.last().cloned()
    }

    /// Every rendered page, oldest first
    pub fn pages(&self) -> Vec<PageView> {
        self.lock().pages.clone()
    }

    /// Loading indicator visibility of each render, oldest first
    pub fn loading_history(&self) -> Vec<bool> {
        self.lock().pages.iter().map(|p| p.loading_visible).collect()
    }

    pub fn render_count(&self) -> usize {
        self.lock().pages.len()
    }

    pub fn scroll_count(&self) -> usize {
        self.lock().scrolls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for RecordingSurface {
    fn render(&self, page: &PageView) {
        self.lock().pages.push(page.clone());
    }

    fn scroll_to_form(&self) {
        self.lock().scrolls += 1;
    }
}
