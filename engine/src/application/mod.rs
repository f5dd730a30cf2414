//! Application layer
//! Wires ports, services and use cases together

pub mod registry;

pub use registry::UseCaseRegistry;
