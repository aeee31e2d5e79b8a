use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rpc_url: String,
    pub contract_address: String,
    pub from_block: u64,
    pub to_block: BlockTag,
    pub request_timeout_ms: u64,
}

/// Upper or lower bound of a block range in a log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Number(u64),
    Latest,
}

impl BlockTag {
    /// JSON-RPC form: hex quantity or the literal `latest`.
    pub fn to_rpc_string(&self) -> String {
        match self {
            BlockTag::Number(n) => format!("0x{:x}", n),
            BlockTag::Latest => "latest".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let rpc_url = env_map
            .get("RPC_URL")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("RPC_URL".to_string()))?;

        let contract_address = env_map
            .get("CONTRACT_ADDRESS")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("CONTRACT_ADDRESS".to_string()))?;

        let from_block = env_map
            .get("FROM_BLOCK")
            .map(|s| s.as_str())
            .unwrap_or("0")
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "FROM_BLOCK".to_string(),
                    "must be a block number".to_string(),
                )
            })?;

        let to_block = match env_map.get("TO_BLOCK").map(|s| s.as_str()).unwrap_or("latest") {
            "latest" => BlockTag::Latest,
            other => BlockTag::Number(other.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue(
                    "TO_BLOCK".to_string(),
                    format!("must be a block number or latest, got {}", other),
                )
            })?),
        };

        let request_timeout_ms = env_map
            .get("REQUEST_TIMEOUT_MS")
            .map(|s| s.as_str())
            .unwrap_or("30000")
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "REQUEST_TIMEOUT_MS".to_string(),
                    "must be a valid u64".to_string(),
                )
            })?;

        Ok(Config {
            port,
            rpc_url,
            contract_address,
            from_block,
            to_block,
            request_timeout_ms,
        })
    }
}
