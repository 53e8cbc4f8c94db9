//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración del
//! cliente legado.

pub mod environment;

pub use environment::*;
