pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod jitter;
pub mod observability;
pub mod routes;
pub mod state;
pub mod system_a;
pub mod system_b;
pub mod types;
