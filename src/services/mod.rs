use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod cliente;

/// Failures surfaced by the service layer to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Lookup by identifier yielded no record.
    #[error("Cliente no encontrado con id: {0}")]
    NotFound(i32),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
