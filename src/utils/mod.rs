//! Utilidades del sistema

pub mod errors;
