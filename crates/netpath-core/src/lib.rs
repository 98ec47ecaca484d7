//! Netpath Core Library
//!
//! Core domain logic for the netpath minimum-delay route finder.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
