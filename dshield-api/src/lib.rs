// Library exports for the D-Shield mock API server
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
