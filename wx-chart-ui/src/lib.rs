//! Shared Dioxus components and D3.js bridge for the weather dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand chart requests to the D3.js scripts
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: picker, quick-select buttons, theme toggle, chart panels

pub mod components;
pub mod js_bridge;
pub mod state;
