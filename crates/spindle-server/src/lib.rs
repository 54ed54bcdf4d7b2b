//! spindle-server
//!
//! HTTP transport for the spindle task store. The core is consumed purely
//! through the Service contract; this crate owns routing, JSON shapes,
//! cursor token handling, and error-to-status mapping.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
