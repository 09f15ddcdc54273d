//! Core lookups: slide path resolution, presentation listing, root discovery.
//!
//! Nothing in this module spawns processes or reads process-wide state.
//! Callers pass in the root directory and configuration explicitly.

pub mod presentations;
pub mod root;
