pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod quiz;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
