//! Command-line front end for the productivity calculator.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod session_repl;
pub mod utils;
