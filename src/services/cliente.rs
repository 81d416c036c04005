use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::repository::{ClienteReader, ClienteWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a new cliente; the store assigns the identifier, the creation
/// timestamp and the default `activo` flag.
pub fn create_cliente<R>(repo: &R, new_cliente: &NewCliente) -> ServiceResult<Cliente>
where
    R: ClienteWriter + ?Sized,
{
    repo.create_cliente(new_cliente).map_err(ServiceError::from)
}

/// Fetches a cliente by its identifier.
pub fn get_cliente_by_id<R>(repo: &R, cliente_id: i32) -> ServiceResult<Cliente>
where
    R: ClienteReader + ?Sized,
{
    repo.get_cliente_by_id(cliente_id)?
        .ok_or(ServiceError::NotFound(cliente_id))
}

/// Overwrites the contact fields of an existing cliente. The record must
/// exist; identifier and creation timestamp are preserved.
pub fn update_cliente<R>(
    repo: &R,
    cliente_id: i32,
    updates: &UpdateCliente,
) -> ServiceResult<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    get_cliente_by_id(repo, cliente_id)?;

    repo.update_cliente(cliente_id, updates)
        .map_err(ServiceError::from)
}

/// Removes an existing cliente from the store.
pub fn delete_cliente<R>(repo: &R, cliente_id: i32) -> ServiceResult<()>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    get_cliente_by_id(repo, cliente_id)?;

    repo.delete_cliente(cliente_id).map_err(ServiceError::from)
}
