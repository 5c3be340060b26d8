//! Static content and view-selection logic for the Invercargill Job Finder.
//!
//! Everything here is plain data or pure functions so it can be tested
//! natively; the Dioxus layer in `ijf-ui` only reads from it.

pub mod error;
pub mod industry;
pub mod navigation;
pub mod resources;
pub mod scroll_spy;
pub mod sector;
pub mod selection;
