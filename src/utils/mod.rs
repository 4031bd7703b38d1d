//! Utility modules for common functionality
//!
//! File access, locale switching and the per-run session scope.

pub mod fs;
pub mod locale;
pub mod session;

pub use session::Session;
