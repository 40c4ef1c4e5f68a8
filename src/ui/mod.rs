//! UI components module

pub mod dialogs;
pub mod list_panel;
