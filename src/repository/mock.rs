//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClienteReader, ClienteWriter};

mock! {
    pub Repository {}

    impl ClienteReader for Repository {
        fn get_cliente_by_id(&self, cliente_id: i32) -> RepositoryResult<Option<Cliente>>;
    }

    impl ClienteWriter for Repository {
        fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
        fn update_cliente(
            &self,
            cliente_id: i32,
            updates: &UpdateCliente,
        ) -> RepositoryResult<Cliente>;
        fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()>;
        fn delete_all_clientes(&self) -> RepositoryResult<usize>;
    }
}
