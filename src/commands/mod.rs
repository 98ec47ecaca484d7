//! CLI commands for netpath

pub mod dispatch;
pub mod helpers;
pub mod route;
pub mod topology;
