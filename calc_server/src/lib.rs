//! # calc_server - HTTP transport for calc_core
//!
//! Thin JSON layer: each endpoint deserializes a request, converts it into a
//! [`calc_core::Calculation`] and returns the result record. No calculation
//! logic lives here.

pub mod api;
pub mod config;

pub use api::{router, AppState};
pub use config::{load_config, Config, ServerConfig};
