pub mod config_service;
pub mod traits;
