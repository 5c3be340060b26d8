//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page's reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ijf_content::industry::IndustryStat;
use ijf_content::selection::PageSelection;

/// Shared state for the job finder page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active sector tab and highlighted navigation anchor
    pub selection: Signal<PageSelection>,
    /// Industry chart dataset (empty until loaded on mount)
    pub industries: Signal<Vec<IndustryStat>>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_selection(PageSelection::new())
    }

    /// Create an AppState starting from a given selection.
    pub fn with_selection(selection: PageSelection) -> Self {
        Self {
            selection: Signal::new(selection),
            industries: Signal::new(Vec::new()),
            error_msg: Signal::new(None),
        }
    }
}
