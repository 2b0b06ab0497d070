use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError, infra::storage::StoreError};

/// Top-level failure reported by the service binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
