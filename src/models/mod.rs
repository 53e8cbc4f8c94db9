//! Modelos del sistema
//!
//! El modelo de dominio y su forma en el protocolo del legado.

pub mod legacy_vehicle;
pub mod vehicle;
