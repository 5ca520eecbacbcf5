#![forbid(unsafe_code)]

pub mod config;
pub mod drill;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

pub use config::{ArgsError, Command, DrillConfig, ListConfig, ServeConfig};
pub use state::AppState;
