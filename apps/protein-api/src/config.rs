use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;
use domain_proteins::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Database used when neither `MONGODB_DATABASE` nor `MONGO_DATABASE` is set
pub const DEFAULT_DATABASE: &str = "protein";

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Collection holding the protein documents (`PROTEIN_COLLECTION`)
    pub collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mut mongodb = MongoConfig::from_env_with_default_database(DEFAULT_DATABASE)?;
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        let collection = env_or_default("PROTEIN_COLLECTION", DEFAULT_COLLECTION);

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            collection,
        })
    }
}
