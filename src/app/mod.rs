//! Application orchestration: launch context, the launcher flow, and the
//! child process it starts.

pub mod child;
pub mod context;
pub mod launcher;
