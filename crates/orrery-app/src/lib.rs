//! Orrery application framework.
//!
//! Provides window creation, event handling, and the main frame loop.

pub mod platform;
pub mod window;
