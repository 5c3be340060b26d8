//! Shared Dioxus components and browser glue for the job finder page.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `scroll`: section offsets, passive scroll listener and smooth scrolling via `web_sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `theme`: palette shared by the inline styles
//! - `components`: Reusable RSX components (navigation, sector tabs, cards, etc.)

pub mod components;
pub mod js_bridge;
pub mod scroll;
pub mod state;
pub mod theme;
