use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cliente::{
    Cliente as DomainCliente, NewCliente as DomainNewCliente, UpdateCliente as DomainUpdateCliente,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel model for [`crate::domain::cliente::Cliente`].
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub fecha_creacion: NaiveDateTime,
    pub activo: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`]. `fecha_creacion` and `activo` come from
/// the table defaults.
pub struct NewCliente<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub telefono: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
/// Data used when updating a [`Cliente`] record.
pub struct UpdateCliente<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub telefono: &'a str,
}

impl From<Cliente> for DomainCliente {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            nombre: cliente.nombre,
            email: cliente.email,
            telefono: cliente.telefono,
            fecha_creacion: cliente.fecha_creacion,
            activo: cliente.activo,
        }
    }
}

impl<'a> From<&'a DomainNewCliente> for NewCliente<'a> {
    fn from(cliente: &'a DomainNewCliente) -> Self {
        Self {
            nombre: cliente.nombre.as_str(),
            email: cliente.email.as_str(),
            telefono: cliente.telefono.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCliente> for UpdateCliente<'a> {
    fn from(cliente: &'a DomainUpdateCliente) -> Self {
        Self {
            nombre: cliente.nombre.as_str(),
            email: cliente.email.as_str(),
            telefono: cliente.telefono.as_str(),
        }
    }
}
