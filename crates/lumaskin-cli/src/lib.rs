//! CLI library components for `lumaskin`.

pub mod commands;
pub mod logging;
pub mod types;
