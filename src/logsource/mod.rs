//! Log source abstraction for fetching raw event logs from a node.

use async_trait::async_trait;
use std::fmt;

pub mod mock;
pub mod rpc;

pub use mock::MockLogSource;
pub use rpc::JsonRpcLogSource;

use crate::config::BlockTag;

/// Filter describing which logs to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    /// Contract address that emitted the logs.
    pub address: String,
    pub from_block: BlockTag,
    pub to_block: BlockTag,
    /// Topic filter; position 0 is the event signature topic.
    pub topics: Vec<String>,
}

/// A raw log entry as returned by the node, payload undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    pub topics: Vec<String>,
    /// ABI-encoded event data, 0x-prefixed hex.
    pub data: String,
    pub block_number: u64,
    /// Position within the block, when the node reports one.
    pub log_index: Option<u64>,
    pub transaction_hash: String,
}

/// Log source trait for fetching historical event logs.
///
/// The network provider is injected through this trait so the decoding and
/// aggregation layers stay testable without a live node.
#[async_trait]
pub trait LogSource: Send + Sync + fmt::Debug {
    /// Fetch all logs matching the filter, in the order the node returns
    /// them.
    async fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, LogSourceError>;
}

/// Error type for log source operations. Fetch failures are total: no
/// partial results are returned.
#[derive(Debug, Clone)]
pub enum LogSourceError {
    /// Network error (e.g., connection timeout, DNS failure)
    NetworkError(String),
    /// HTTP error from the node endpoint
    HttpError { status: u16, message: String },
    /// JSON-RPC level error returned by the node
    RpcError { code: i64, message: String },
    /// Malformed RPC response
    ParseError(String),
}

impl fmt::Display for LogSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LogSourceError::HttpError { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            LogSourceError::RpcError { code, message } => {
                write!(f, "RPC error {}: {}", code, message)
            }
            LogSourceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LogSourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logsource_error_display() {
        let err = LogSourceError::NetworkError("connection timeout".to_string());
        assert_eq!(err.to_string(), "Network error: connection timeout");

        let err = LogSourceError::HttpError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502: Bad gateway");

        let err = LogSourceError::RpcError {
            code: -32602,
            message: "invalid params".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error -32602: invalid params");

        let err = LogSourceError::ParseError("invalid JSON".to_string());
        assert_eq!(err.to_string(), "Parse error: invalid JSON");
    }

    #[test]
    fn test_log_filter_clone_and_eq() {
        let filter = LogFilter {
            address: "0xabc".to_string(),
            from_block: BlockTag::Number(0),
            to_block: BlockTag::Latest,
            topics: vec!["0x1682".to_string()],
        };
        let filter2 = filter.clone();
        assert_eq!(filter, filter2);
    }
}
