//! Modelo de Vehicle
//!
//! Este módulo contiene la entidad de dominio expuesta por la API: un vehículo
//! de subasta con su lote y la última puja registrada en el sistema legado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehículo de subasta
///
/// `id == 0` significa que el vehículo todavía no fue registrado en el legado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub model_year: i32,
    pub manufacturing_year: i32,
    #[serde(default)]
    pub lot: Lot,
    #[serde(default)]
    pub bid: Bid,
}

/// Lote al que pertenece el vehículo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// Agrupador de un conjunto de vehículos
    pub id: String,
    /// Código único del vehículo dentro del lote
    pub vehicle_lot_id: String,
}

/// Última puja registrada para el vehículo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default)]
    pub date: DateTime<Utc>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(default)]
    pub user: String,
}

impl Bid {
    /// Una puja sin fecha conserva el valor por defecto (epoch)
    pub fn has_date(&self) -> bool {
        self.date != DateTime::<Utc>::default()
    }
}

impl Vehicle {
    /// Verificar si el legado ya asignó identidad al vehículo
    pub fn is_registered(&self) -> bool {
        self.id > 0
    }
}
