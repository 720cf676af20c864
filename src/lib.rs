pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::{AppConfig, ConfigError};
pub use database::ActivityRegistry;
pub use error::RegistryError;
