//! Core types shared across the crate.

mod route;
mod state;

pub use route::RouteKey;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
