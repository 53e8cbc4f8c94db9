//! Services module
//!
//! Lógica de negocio: filtros, orden y orquestación del legado.

pub mod filters;
pub mod sorting;
pub mod vehicle_service;

pub use vehicle_service::VehicleService;
