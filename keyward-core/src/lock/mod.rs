//! Password entry and lockout policy

pub mod attempts;
pub mod buffer;
pub mod controller;

pub use attempts::AttemptCounter;
pub use buffer::{BufferError, InputBuffer};
pub use controller::LockController;
