//! Utility modules for the estatelist application.
//!
//! Cross-cutting helpers with no UI or network concerns. Everything here is
//! pure and easy to unit test.

pub mod datetime;
pub mod text;
