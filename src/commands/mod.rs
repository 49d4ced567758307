//! CLI commands for edgegraph

pub mod dispatch;
pub mod distance;
pub mod format;
pub mod show;
pub mod steps;
pub mod walk;
