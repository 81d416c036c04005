use diesel::prelude::*;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::repository::{ClienteReader, ClienteWriter, DieselRepository, errors::RepositoryResult};

impl ClienteReader for DieselRepository {
    fn get_cliente_by_id(&self, cliente_id: i32) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.pool().get()?;
        let cliente = clientes::table
            .find(cliente_id)
            .first::<DbCliente>(&mut conn)
            .optional()?;

        Ok(cliente.map(Into::into))
    }
}

impl ClienteWriter for DieselRepository {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, NewCliente as DbNewCliente};
        use crate::schema::clientes;

        let mut conn = self.pool().get()?;
        let insertable: DbNewCliente = new_cliente.into();

        // The RETURNING clause hands back the row with the generated id and
        // the `fecha_creacion`/`activo` defaults filled in.
        let created = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbCliente>(&mut conn)?;

        Ok(created.into())
    }

    fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, UpdateCliente as DbUpdateCliente};
        use crate::schema::clientes;

        let mut conn = self.pool().get()?;
        let db_updates: DbUpdateCliente = updates.into();

        let updated = diesel::update(clientes::table.find(cliente_id))
            .set(&db_updates)
            .get_result::<DbCliente>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()> {
        use crate::schema::clientes;

        let mut conn = self.pool().get()?;
        diesel::delete(clientes::table.find(cliente_id)).execute(&mut conn)?;
        Ok(())
    }

    fn delete_all_clientes(&self) -> RepositoryResult<usize> {
        use crate::schema::clientes;

        let mut conn = self.pool().get()?;
        let removed = diesel::delete(clientes::table).execute(&mut conn)?;
        Ok(removed)
    }
}
