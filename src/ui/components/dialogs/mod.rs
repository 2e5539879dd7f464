//! Dialog components module

pub mod activity_log;
pub mod common;
pub mod confirm;
pub mod help;
