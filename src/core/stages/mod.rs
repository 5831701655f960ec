//! The five pipeline stage functions.
//!
//! Each stage reads the previous cycle's snapshot and writes its output
//! latch in the next state. Signatures follow the double-buffering
//! discipline: `fn stage(cur: &Machine, next: &mut Machine)`.

mod decode;
mod execute;
mod fetch;
mod memory_access;
mod write_back;

pub use decode::decode;
pub use execute::execute;
pub use fetch::fetch;
pub use memory_access::memory_access;
pub use write_back::write_back;
