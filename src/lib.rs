pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod server;
pub mod stats;
pub mod telemetry;
