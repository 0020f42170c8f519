//! Core assistant components
//!
//! Reply selection, the per-user chat session, and the registry that keeps
//! sessions apart.

mod registry;
pub mod selector;
mod session;

pub use registry::{SessionError, SessionLimits, SessionRegistry};
pub use session::Exchange;
