use clientes_api::domain::cliente::{NewCliente, UpdateCliente};
use clientes_api::repository::{ClienteReader, ClienteWriter, DieselRepository};

mod common;

#[test]
fn test_cliente_repository_crud() {
    let test_db = common::TestDb::new("test_cliente_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_cliente(&NewCliente::new("Alice", "alice@example.com", "111"))
        .unwrap();
    assert!(alice.id > 0);
    assert!(alice.activo);

    let bob = repo
        .create_cliente(&NewCliente::new("Bob", "bob@example.com", "222"))
        .unwrap();
    assert_ne!(alice.id, bob.id);

    let fetched = repo.get_cliente_by_id(bob.id).unwrap().unwrap();
    assert_eq!(fetched.nombre, "Bob");
    assert_eq!(fetched.email, "bob@example.com");
    assert_eq!(fetched.telefono, "222");

    let updated = repo
        .update_cliente(
            bob.id,
            &UpdateCliente::new("Bobby", "bobby@example.com", "333"),
        )
        .unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.nombre, "Bobby");
    assert_eq!(updated.fecha_creacion, bob.fecha_creacion);
    assert!(updated.activo);

    repo.delete_cliente(alice.id).unwrap();
    assert!(repo.get_cliente_by_id(alice.id).unwrap().is_none());
    assert!(repo.get_cliente_by_id(bob.id).unwrap().is_some());
}

#[test]
fn test_get_missing_cliente_returns_none() {
    let test_db = common::TestDb::new("test_get_missing_cliente.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(repo.get_cliente_by_id(99).unwrap().is_none());
}

#[test]
fn test_delete_all_clientes() {
    let test_db = common::TestDb::new("test_delete_all_clientes.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_cliente(&NewCliente::new("Alice", "alice@example.com", "111"))
        .unwrap();
    repo.create_cliente(&NewCliente::new("Bob", "bob@example.com", "222"))
        .unwrap();

    let removed = repo.delete_all_clientes().unwrap();
    assert_eq!(removed, 2);
    assert_eq!(repo.delete_all_clientes().unwrap(), 0);
}
