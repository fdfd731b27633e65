pub mod api;
pub mod cli;
pub mod config;
pub mod dump;
pub mod logging;
pub mod ui;
