// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage slot unavailable: {0}")]
    StorageError(String),
    #[error("Data directory error: {0}")]
    DataDirError(String),
    #[error("Daily chat quota of {0} requests is used up for today")]
    QuotaExhausted(u32),
}
