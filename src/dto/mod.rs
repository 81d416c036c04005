//! DTOs exposed at the HTTP boundary.

pub mod cliente;
