use crate::db::DbPool;
use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::repository::errors::RepositoryResult;

pub mod cliente;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read-side operations over stored clientes.
pub trait ClienteReader {
    fn get_cliente_by_id(&self, cliente_id: i32) -> RepositoryResult<Option<Cliente>>;
}

/// Write-side operations over stored clientes.
pub trait ClienteWriter {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
    fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente) -> RepositoryResult<Cliente>;
    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()>;
    fn delete_all_clientes(&self) -> RepositoryResult<usize>;
}

/// Diesel-backed repository handle shared across handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
