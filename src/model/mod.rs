//! Application data model

pub mod todo_list;
