//! Settings record and on-disk store

pub mod font;
pub mod settings;
