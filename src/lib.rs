pub mod api;
pub mod config;
pub mod decoder;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logsource;

pub use config::{BlockTag, Config};
pub use decoder::{decode_vault_update, DecodeError, DecodedEvent};
pub use domain::{Address, Decimal, OperationKind, VaultOperation, VaultStatus};
pub use engine::{aggregate, build_histories, AccountSummary};
pub use error::AppError;
pub use logsource::{
    JsonRpcLogSource, LogFilter, LogSource, LogSourceError, MockLogSource, RawLog,
};
