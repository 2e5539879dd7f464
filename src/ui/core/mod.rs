//! Core UI functionality for the Estatelist application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions and background job
//! management. It provides the foundation that all UI components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard input handling
//! - [`job_manager`] - Background job management for API calls
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Jobs** run API calls asynchronously via the [`JobManager`]

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod job_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use job_manager::{JobId, JobManager};
