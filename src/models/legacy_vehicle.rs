//! Modelos del protocolo legado
//!
//! El servicio legado habla un dialecto JSON propio: nombres de campo en
//! portugués, un comando `OPERACAO` y fechas codificadas como texto.
//! Aquí vive la traducción entre ese formato y la entidad de dominio.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::vehicle::{Bid, Lot, Vehicle};

/// Formato fijo de `DATALANCE`: `dd/mm/yyyy - HH:MM`
pub const LEGACY_DATE_FORMAT: &str = "%d/%m/%Y - %H:%M";

/// Centinela para campos de texto ausentes o irrelevantes
pub const LEGACY_SENTINEL: &str = "-";

/// Operaciones aceptadas por el legado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegacyOperation {
    #[serde(rename = "consultar")]
    List,
    #[serde(rename = "criar")]
    Create,
    #[serde(rename = "alterar")]
    Update,
    #[serde(rename = "apagar")]
    Delete,
}

impl LegacyOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyOperation::List => "consultar",
            LegacyOperation::Create => "criar",
            LegacyOperation::Update => "alterar",
            LegacyOperation::Delete => "apagar",
        }
    }
}

/// Sobre de comando enviado en cada POST
#[derive(Debug, Serialize)]
pub struct LegacyCommand<'a> {
    #[serde(rename = "OPERACAO")]
    pub operation: LegacyOperation,
    #[serde(rename = "VEICULO")]
    pub vehicle: &'a LegacyVehicle,
}

/// Vehículo tal como viaja por el cable
///
/// El legado a veces manda `null` en lugar de omitir el campo; se lee como
/// el valor por defecto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyVehicle {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_unassigned"
    )]
    pub id: i64,
    #[serde(rename = "DATALANCE", default, deserialize_with = "null_as_default")]
    pub bid_date: String,
    #[serde(rename = "LOTE", default, deserialize_with = "null_as_default")]
    pub lot_id: String,
    #[serde(rename = "CODIGOCONTROLE", default, deserialize_with = "null_as_default")]
    pub vehicle_lot_id: String,
    #[serde(rename = "MARCA", default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(rename = "MODELO", default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(rename = "ANOFABRICACAO", default, deserialize_with = "null_as_default")]
    pub manufacturing_year: i32,
    #[serde(rename = "ANOMODELO", default, deserialize_with = "null_as_default")]
    pub model_year: i32,
    #[serde(
        rename = "VALORLANCE",
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "null_as_zero"
    )]
    pub bid_value: Decimal,
    #[serde(rename = "USUARIOLANCE", default, deserialize_with = "null_as_default")]
    pub bid_user: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(rust_decimal::serde::float_option::deserialize(deserializer)?.unwrap_or_default())
}

fn is_unassigned(id: &i64) -> bool {
    *id == 0
}

fn or_sentinel(value: &str) -> String {
    if value.trim().is_empty() {
        LEGACY_SENTINEL.to_string()
    } else {
        value.to_string()
    }
}

/// Parsear `DATALANCE`; las fechas del legado se interpretan en UTC
pub fn parse_legacy_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), LEGACY_DATE_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Formatear una fecha de dominio al formato del legado
pub fn format_legacy_date(date: &DateTime<Utc>) -> String {
    date.format(LEGACY_DATE_FORMAT).to_string()
}

impl LegacyVehicle {
    /// Registro vacío usado por `consultar`
    pub fn blank() -> Self {
        Self {
            bid_date: LEGACY_SENTINEL.to_string(),
            lot_id: LEGACY_SENTINEL.to_string(),
            vehicle_lot_id: LEGACY_SENTINEL.to_string(),
            brand: LEGACY_SENTINEL.to_string(),
            model: LEGACY_SENTINEL.to_string(),
            bid_user: LEGACY_SENTINEL.to_string(),
            ..Default::default()
        }
    }

    /// Registro para `criar`: la puja todavía no existe
    pub fn for_create(vehicle: &Vehicle) -> Self {
        Self {
            id: 0,
            bid_date: LEGACY_SENTINEL.to_string(),
            lot_id: or_sentinel(&vehicle.lot.id),
            vehicle_lot_id: or_sentinel(&vehicle.lot.vehicle_lot_id),
            brand: or_sentinel(&vehicle.brand),
            model: or_sentinel(&vehicle.model),
            manufacturing_year: vehicle.manufacturing_year,
            model_year: vehicle.model_year,
            bid_value: Decimal::ZERO,
            bid_user: LEGACY_SENTINEL.to_string(),
        }
    }

    /// Registro para `alterar`: el vehículo completo, con la puja si existe
    pub fn for_update(vehicle: &Vehicle) -> Self {
        let bid_date = if vehicle.bid.has_date() {
            format_legacy_date(&vehicle.bid.date)
        } else {
            LEGACY_SENTINEL.to_string()
        };

        Self {
            id: vehicle.id,
            bid_date,
            lot_id: or_sentinel(&vehicle.lot.id),
            vehicle_lot_id: or_sentinel(&vehicle.lot.vehicle_lot_id),
            brand: or_sentinel(&vehicle.brand),
            model: or_sentinel(&vehicle.model),
            manufacturing_year: vehicle.manufacturing_year,
            model_year: vehicle.model_year,
            bid_value: vehicle.bid.value,
            bid_user: or_sentinel(&vehicle.bid.user),
        }
    }

    /// Registro para `apagar`: solo importa el ID
    pub fn for_delete(id: i64) -> Self {
        Self {
            id,
            ..Self::blank()
        }
    }

    /// Traducir un registro de `consultar` a la entidad de dominio.
    ///
    /// Falla si `DATALANCE` no respeta el formato fijo.
    pub fn into_vehicle(self) -> Result<Vehicle, chrono::ParseError> {
        let date = parse_legacy_date(&self.bid_date)?;

        Ok(Vehicle {
            id: self.id,
            brand: self.brand,
            model: self.model,
            model_year: self.model_year,
            manufacturing_year: self.manufacturing_year,
            lot: Lot {
                id: self.lot_id,
                vehicle_lot_id: self.vehicle_lot_id,
            },
            bid: Bid {
                date,
                value: self.bid_value,
                user: self.bid_user,
            },
        })
    }

    /// Volcar la respuesta de `criar` sobre el vehículo del llamador.
    ///
    /// Nunca toca la puja: en la creación `DATALANCE` es el centinela.
    pub fn apply_identity(&self, vehicle: &mut Vehicle) {
        vehicle.id = self.id;

        if let Some(brand) = meaningful(&self.brand) {
            vehicle.brand = brand;
        }
        if let Some(model) = meaningful(&self.model) {
            vehicle.model = model;
        }
        if self.model_year != 0 {
            vehicle.model_year = self.model_year;
        }
        if self.manufacturing_year != 0 {
            vehicle.manufacturing_year = self.manufacturing_year;
        }
        if let Some(lot_id) = meaningful(&self.lot_id) {
            vehicle.lot.id = lot_id;
        }
        if let Some(vehicle_lot_id) = meaningful(&self.vehicle_lot_id) {
            vehicle.lot.vehicle_lot_id = vehicle_lot_id;
        }
    }
}

fn meaningful(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == LEGACY_SENTINEL {
        None
    } else {
        Some(value.to_string())
    }
}
