//! Widgets for the demo TUI.

pub mod overlay;
