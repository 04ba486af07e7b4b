//! tqc library - command handlers exposed for unit and process tests

pub mod commands;
pub mod logging;
pub mod output;
pub mod utils;
