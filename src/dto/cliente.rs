//! Wire-level request/response shapes for the clientes API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};

/// Body accepted by both `POST` and `PUT`. Email format is deliberately not
/// checked here; only the presence of a non-empty `nombre` is enforced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClienteRequest {
    #[validate(length(min = 1))]
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

/// Full projection of a stored cliente returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub fecha_creacion: NaiveDateTime,
    pub activo: bool,
}

impl From<&ClienteRequest> for NewCliente {
    fn from(request: &ClienteRequest) -> Self {
        NewCliente::new(&request.nombre, &request.email, &request.telefono)
    }
}

impl From<&ClienteRequest> for UpdateCliente {
    fn from(request: &ClienteRequest) -> Self {
        UpdateCliente::new(&request.nombre, &request.email, &request.telefono)
    }
}

impl From<Cliente> for ClienteResponse {
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
