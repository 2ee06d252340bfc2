//! Configuration types
//!
//! Policy constants for the lock and board-level wiring/timing. Both are
//! fixed at build time; nothing here is persisted or editable at runtime.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
