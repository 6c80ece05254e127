//! UI module for the demo TUI.

pub mod render;
pub mod theme;
pub mod widgets;
