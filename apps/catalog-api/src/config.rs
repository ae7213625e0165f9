//! Configuration for the Catalog API

use axum_helpers::JwtConfig;
use core_config::{server::ServerConfig, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, assembled once at startup and passed into
/// constructors explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            mongodb,
            jwt,
            server,
            environment,
        })
    }
}
