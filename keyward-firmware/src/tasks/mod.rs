//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod debug_tx;
pub mod lock;

pub use debug_tx::debug_tx_task;
pub use lock::lock_task;
