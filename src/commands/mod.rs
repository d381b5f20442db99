//! CLI commands for pathtrace

pub mod config;
pub mod dispatch;
pub mod input;
pub mod nodes;
pub mod path;
pub mod replay;
pub mod run;
