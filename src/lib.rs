//! To-do List ticker
//!
//! A small desktop utility: edit a to-do list in one window, display it as a
//! scrolling marquee overlay in another. The model, settings store and scroll
//! arithmetic live in this library so they test headless; the binary only
//! wires up logging and the GUI shell.

pub mod app;
pub mod config;
pub mod model;
pub mod ticker;
pub mod ui;
