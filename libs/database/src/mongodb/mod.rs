//! MongoDB connection management and health checks

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    client_from_config, client_options, connect_from_config, connect_from_config_with_retry, ping,
};
pub use health::check_health;

pub use mongodb::{Client, Collection, Database};
