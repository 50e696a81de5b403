// Environment-driven service configuration.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rpc_url: String,
    pub public_base_url: String,
    pub signer_uuid: String,
    pub neynar_api_key: String,
    pub webhook_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            rpc_url: env::var("BASE_RPC_URL")
                .unwrap_or_else(|_| "https://base.llamarpc.com".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://fungibles-functions.vercel.app".to_string()),
            signer_uuid: required("SIGNER_UUID")?,
            neynar_api_key: required("NEYNAR_API_KEY")?,
            webhook_secret: required("NEYNAR_WEBHOOK_SECRET")?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}
