//! Mock log source for testing without network calls.

use super::{LogFilter, LogSource, LogSourceError, RawLog};
use async_trait::async_trait;

/// Mock log source that returns predefined logs.
#[derive(Debug, Clone, Default)]
pub struct MockLogSource {
    logs: Vec<RawLog>,
    failure: Option<LogSourceError>,
}

impl MockLogSource {
    /// Create a new mock log source with no logs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log to the mock source.
    pub fn with_log(mut self, log: RawLog) -> Self {
        self.logs.push(log);
        self
    }

    /// Add multiple logs to the mock source.
    pub fn with_logs(mut self, logs: Vec<RawLog>) -> Self {
        self.logs.extend(logs);
        self
    }

    /// Make every fetch fail with the given error.
    pub fn failing(mut self, err: LogSourceError) -> Self {
        self.failure = Some(err);
        self
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, LogSourceError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(self
            .logs
            .iter()
            .filter(|log| match filter.topics.first() {
                Some(topic0) => log.topics.first() == Some(topic0),
                None => true,
            })
            .cloned()
            .collect())
    }
}
