use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored customer record. `id`, `fecha_creacion` and `activo` are assigned
/// by the store at insert time and never change afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub fecha_creacion: NaiveDateTime,
    pub activo: bool,
}

/// Payload for creating a cliente. Carries no identifier and no timestamp;
/// the store fills those in.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCliente {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

impl NewCliente {
    #[must_use]
    pub fn new(
        nombre: impl Into<String>,
        email: impl Into<String>,
        telefono: impl Into<String>,
    ) -> Self {
        Self {
            nombre: nombre.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            telefono: telefono.into().trim().to_string(),
        }
    }
}

/// Contact fields overwritten by an update. Identifier and creation timestamp
/// are not part of the payload.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateCliente {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

impl UpdateCliente {
    #[must_use]
    pub fn new(
        nombre: impl Into<String>,
        email: impl Into<String>,
        telefono: impl Into<String>,
    ) -> Self {
        Self {
            nombre: nombre.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            telefono: telefono.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cliente_normalizes_fields() {
        let nuevo = NewCliente::new("  Juan Pérez ", " Juan@Test.COM ", " 0999999999 ");
        assert_eq!(nuevo.nombre, "Juan Pérez");
        assert_eq!(nuevo.email, "juan@test.com");
        assert_eq!(nuevo.telefono, "0999999999");
    }

    #[test]
    fn update_cliente_normalizes_fields() {
        let cambios = UpdateCliente::new("Ana", "ANA@test.com", " 0966666666");
        assert_eq!(cambios.nombre, "Ana");
        assert_eq!(cambios.email, "ana@test.com");
        assert_eq!(cambios.telefono, "0966666666");
    }
}
