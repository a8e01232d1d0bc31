//! Shared application state.

use database::mongodb::{Client, Database};

/// Cloned into every router that needs it; all members are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Pooled MongoDB client, used for readiness pings and shutdown
    pub mongo: Client,
    /// Database holding the protein collection
    pub db: Database,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo: Client) -> Self {
        let db = mongo.database(config.mongodb.database());
        Self { config, mongo, db }
    }
}
