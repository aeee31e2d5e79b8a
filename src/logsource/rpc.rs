//! JSON-RPC log source implementation (eth_getLogs).

use super::{LogFilter, LogSource, LogSourceError, RawLog};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Log source backed by an Ethereum-compatible JSON-RPC endpoint.
///
/// Failures are surfaced immediately, never retried. The configured timeout
/// bounds each request.
#[derive(Debug, Clone)]
pub struct JsonRpcLogSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl JsonRpcLogSource {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout,
        }
    }

    async fn post_rpc(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, LogSourceError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LogSourceError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogSourceError::HttpError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LogSourceError::ParseError(e.to_string()))?;

        if let Some(err) = body.get("error") {
            return Err(LogSourceError::RpcError {
                code: err.get("code").and_then(|v| v.as_i64()).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown RPC error")
                    .to_string(),
            });
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| LogSourceError::ParseError("missing result field".to_string()))
    }
}

#[async_trait]
impl LogSource for JsonRpcLogSource {
    async fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, LogSourceError> {
        debug!(
            "Fetching logs for address={}, from={}, to={}",
            filter.address,
            filter.from_block.to_rpc_string(),
            filter.to_block.to_rpc_string()
        );

        let params = serde_json::json!([{
            "address": filter.address,
            "fromBlock": filter.from_block.to_rpc_string(),
            "toBlock": filter.to_block.to_rpc_string(),
            "topics": filter.topics,
        }]);

        let result = self.post_rpc("eth_getLogs", params).await?;

        let entries = result
            .as_array()
            .ok_or_else(|| LogSourceError::ParseError("expected array result".to_string()))?;

        entries.iter().map(parse_log).collect()
    }
}

fn parse_log(entry: &serde_json::Value) -> Result<RawLog, LogSourceError> {
    let topics = entry
        .get("topics")
        .and_then(|v| v.as_array())
        .ok_or_else(|| LogSourceError::ParseError("missing topics field".to_string()))?
        .iter()
        .map(|t| {
            t.as_str()
                .map(str::to_string)
                .ok_or_else(|| LogSourceError::ParseError("non-string topic".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let data = entry
        .get("data")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LogSourceError::ParseError("missing data field".to_string()))?
        .to_string();

    let block_number = entry
        .get("blockNumber")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LogSourceError::ParseError("missing blockNumber field".to_string()))
        .and_then(parse_hex_quantity)?;

    let log_index = entry
        .get("logIndex")
        .and_then(|v| v.as_str())
        .map(parse_hex_quantity)
        .transpose()?;

    let transaction_hash = entry
        .get("transactionHash")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LogSourceError::ParseError("missing transactionHash field".to_string()))?
        .to_string();

    Ok(RawLog {
        topics,
        data,
        block_number,
        log_index,
        transaction_hash,
    })
}

/// Parse a JSON-RPC hex quantity ("0x1a") into a u64.
fn parse_hex_quantity(s: &str) -> Result<u64, LogSourceError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(digits, 16)
        .map_err(|e| LogSourceError::ParseError(format!("invalid hex quantity {}: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x1a").unwrap(), 26);
        assert_eq!(parse_hex_quantity("0xff").unwrap(), 255);
        assert!(parse_hex_quantity("0xzz").is_err());
        assert!(parse_hex_quantity("").is_err());
    }

    #[test]
    fn test_parse_log_valid() {
        let entry = serde_json::json!({
            "topics": ["0xaaa", "0xbbb"],
            "data": "0x00",
            "blockNumber": "0x10",
            "logIndex": "0x2",
            "transactionHash": "0xdeadbeef"
        });

        let log = parse_log(&entry).unwrap();
        assert_eq!(log.topics, vec!["0xaaa".to_string(), "0xbbb".to_string()]);
        assert_eq!(log.data, "0x00");
        assert_eq!(log.block_number, 16);
        assert_eq!(log.log_index, Some(2));
        assert_eq!(log.transaction_hash, "0xdeadbeef");
    }

    #[test]
    fn test_parse_log_without_log_index() {
        let entry = serde_json::json!({
            "topics": [],
            "data": "0x",
            "blockNumber": "0x1",
            "transactionHash": "0xabc"
        });

        let log = parse_log(&entry).unwrap();
        assert_eq!(log.log_index, None);
    }

    #[test]
    fn test_parse_log_missing_block_number() {
        let entry = serde_json::json!({
            "topics": [],
            "data": "0x",
            "transactionHash": "0xabc"
        });

        match parse_log(&entry) {
            Err(LogSourceError::ParseError(msg)) => assert!(msg.contains("blockNumber")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_malformed_topics() {
        let entry = serde_json::json!({
            "topics": [42],
            "data": "0x",
            "blockNumber": "0x1",
            "transactionHash": "0xabc"
        });

        assert!(parse_log(&entry).is_err());
    }
}
