// src/lib.rs
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod poll;
pub mod render;
pub mod routes;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::{create_routes, AppState, Route};
