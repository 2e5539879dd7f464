//! Estatelist - A Terminal User Interface (TUI) for a real-estate CRM
//!
//! This library provides a terminal-based front end for managing leads,
//! companies and channel partners stored on a CRM REST server. It includes
//! an async HTTP client, submit-time form validation, and a rich
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - HTTP client for the CRM REST endpoints
//! * [`config`] - Application configuration management
//! * [`models`] - Record types, drafts and wire payloads
//! * [`validation`] - Submit-time draft validation
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// HTTP client for the CRM REST endpoints
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Record types, form drafts and wire payloads
pub mod models;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Submit-time validation for form drafts
pub mod validation;
