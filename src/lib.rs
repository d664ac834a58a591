pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod input;
pub mod logging;
pub mod render;
pub mod submit;
pub mod ui;
