use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Bid, Lot, Vehicle};
use crate::services::filters::VehicleFilter;
use crate::services::sorting::SortDirection;
use crate::utils::errors::{validation_error, AppError};

// Request para crear o actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i32,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacturing_year: i32,

    #[validate]
    pub lot: LotRequest,

    #[serde(default)]
    pub bid: Option<Bid>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LotRequest {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub vehicle_lot_id: String,
}

impl VehicleRequest {
    pub fn into_vehicle(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            brand: self.brand,
            model: self.model,
            model_year: self.model_year,
            manufacturing_year: self.manufacturing_year,
            lot: Lot {
                id: self.lot.id,
                vehicle_lot_id: self.lot.vehicle_lot_id,
            },
            bid: self.bid.unwrap_or_default(),
        }
    }
}

// Parámetros de búsqueda de vehículos (llegan como texto para poder
// devolver un mensaje preciso por cada parámetro inválido)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuery {
    pub bid_order: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub manufacturing_year_min: Option<String>,
    pub manufacturing_year_max: Option<String>,
    pub manufacturing_year: Option<String>,
    pub model_year: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_year(value: Option<&str>, message: &str) -> Result<Option<i32>, AppError> {
    value
        .map(|v| v.parse::<i32>().map_err(|_| validation_error(message)))
        .transpose()
}

impl VehicleQuery {
    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::from_query(self.bid_order.as_deref())
    }

    /// Construir los filtros pedidos; falla con el primer parámetro inválido
    pub fn filters(&self) -> Result<Vec<VehicleFilter>, AppError> {
        let mut filters = Vec::new();

        if let Some(brand) = present(&self.brand) {
            filters.push(VehicleFilter::brand(brand));
        }
        if let Some(model) = present(&self.model) {
            filters.push(VehicleFilter::model_prefix(model));
        }

        let min = parse_year(
            present(&self.manufacturing_year_min),
            "manufacturing year min is invalid",
        )?;
        let max = parse_year(
            present(&self.manufacturing_year_max),
            "manufacturing year max is invalid",
        )?;
        if min.is_some() || max.is_some() {
            filters.push(VehicleFilter::year_range(
                min.unwrap_or(i32::MIN),
                max.unwrap_or(i32::MAX),
            )?);
        }

        let manufacturing = present(&self.manufacturing_year);
        let model = present(&self.model_year);
        if manufacturing.is_some() || model.is_some() {
            let manufacturing = parse_year(manufacturing, "manufacturing year is invalid")?
                .ok_or_else(|| validation_error("manufacturing year is invalid"))?;
            let model = parse_year(model, "model year is invalid")?
                .ok_or_else(|| validation_error("model year is invalid"))?;
            filters.push(VehicleFilter::year_pair(manufacturing, model)?);
        }

        Ok(filters)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotQuery {
    pub bid_order: Option<String>,
}

// Link HATEOAS
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub uri: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub method: String,
}

impl Link {
    pub fn this(uri: &str, method: &str) -> Self {
        Self {
            uri: uri.to_string(),
            rel: "self".to_string(),
            method: method.to_string(),
        }
    }
}

// Response de un vehículo con sus links
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle: Vehicle,
    pub links: Vec<Link>,
}

impl VehicleResponse {
    pub fn new(vehicle: Vehicle, uri: &str, methods: &[&str]) -> Self {
        Self {
            vehicle,
            links: methods.iter().map(|m| Link::this(uri, m)).collect(),
        }
    }
}
