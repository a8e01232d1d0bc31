//! Database connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, connection retry, health checks
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{connect_from_config_with_retry, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "protein");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
