//! Decoder for VaultUpdated event logs.
//!
//! Event shape:
//! `VaultUpdated(address indexed _borrower, uint256 _debt, uint256 _coll,
//! uint256 stake, uint8 operation)`
//!
//! The borrower rides in topic 1; the remaining fields are four 32-byte
//! words in the data payload. A log that does not match this shape is
//! undecodable and gets skipped by the caller, it never aborts a batch.

use crate::domain::{Address, OperationKind};
use crate::logsource::RawLog;
use thiserror::Error;

/// keccak-256 of the canonical signature
/// `VaultUpdated(address,uint256,uint256,uint256,uint8)`.
pub const VAULT_UPDATED_TOPIC: &str =
    "0x1682adcf84a5197a236a80c9ffe2e7233619140acb7839754c27cdc21799192c";

const WORD_BYTES: usize = 32;
const DATA_WORDS: usize = 4;

/// Typed fields extracted from one VaultUpdated log. Amounts are still raw
/// 10^18 fixed-point integers; unit conversion happens in the history
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    pub borrower: Address,
    pub debt_raw: u128,
    pub coll_raw: u128,
    pub stake_raw: u128,
    pub operation: OperationKind,
    pub block_number: u64,
    pub log_index: Option<u64>,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("log topic does not match VaultUpdated")]
    TopicMismatch,
    #[error("missing indexed borrower topic")]
    MissingBorrower,
    #[error("invalid log data: {0}")]
    InvalidData(String),
    #[error("amount does not fit in 128 bits")]
    AmountOverflow,
    #[error("unknown operation code {0}")]
    UnknownOperation(u128),
}

/// Decode one raw log into a typed VaultUpdated event.
pub fn decode_vault_update(log: &RawLog) -> Result<DecodedEvent, DecodeError> {
    match log.topics.first() {
        Some(topic0) if topic0.eq_ignore_ascii_case(VAULT_UPDATED_TOPIC) => {}
        _ => return Err(DecodeError::TopicMismatch),
    }

    let borrower = log
        .topics
        .get(1)
        .ok_or(DecodeError::MissingBorrower)
        .and_then(|t| decode_address_topic(t))?;

    let words = decode_data_words(&log.data)?;
    let debt_raw = word_to_u128(&words[0])?;
    let coll_raw = word_to_u128(&words[1])?;
    let stake_raw = word_to_u128(&words[2])?;
    let code = word_to_u128(&words[3])?;

    let operation = u8::try_from(code)
        .ok()
        .and_then(OperationKind::from_code)
        .ok_or(DecodeError::UnknownOperation(code))?;

    Ok(DecodedEvent {
        borrower,
        debt_raw,
        coll_raw,
        stake_raw,
        operation,
        block_number: log.block_number,
        log_index: log.log_index,
        transaction_hash: log.transaction_hash.clone(),
    })
}

/// Extract the address from a 32-byte indexed topic (low 20 bytes, the
/// high 12 must be zero padding).
fn decode_address_topic(topic: &str) -> Result<Address, DecodeError> {
    let bytes = decode_hex_word(topic)?;
    if bytes[..WORD_BYTES - 20].iter().any(|b| *b != 0) {
        return Err(DecodeError::InvalidData(
            "borrower topic is not an address".to_string(),
        ));
    }
    Ok(Address::new(format!(
        "0x{}",
        hex::encode(&bytes[WORD_BYTES - 20..])
    )))
}

fn decode_hex_word(s: &str) -> Result<[u8; WORD_BYTES], DecodeError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|e| DecodeError::InvalidData(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| DecodeError::InvalidData("topic is not 32 bytes".to_string()))
}

fn decode_data_words(data: &str) -> Result<Vec<[u8; WORD_BYTES]>, DecodeError> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    let bytes = hex::decode(digits).map_err(|e| DecodeError::InvalidData(e.to_string()))?;
    if bytes.len() != WORD_BYTES * DATA_WORDS {
        return Err(DecodeError::InvalidData(format!(
            "expected {} data bytes, got {}",
            WORD_BYTES * DATA_WORDS,
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word.copy_from_slice(chunk);
            word
        })
        .collect())
}

/// Read a uint256 word as u128. The high 16 bytes must be zero.
fn word_to_u128(word: &[u8; WORD_BYTES]) -> Result<u128, DecodeError> {
    if word[..16].iter().any(|b| *b != 0) {
        return Err(DecodeError::AmountOverflow);
    }
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(buf))
}
