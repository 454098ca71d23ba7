//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod validation;

// Re-export the main handler for convenience
pub use handler::handler;
