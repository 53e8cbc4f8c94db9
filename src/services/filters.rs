//! Filtros de vehículos
//!
//! El legado no filtra del lado del servidor: los filtros son predicados puros
//! que se aplican sobre la colección completa ya traducida.

use thiserror::Error;

use crate::models::vehicle::Vehicle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("year of manufacture cannot be greater than the model")]
    ManufacturingAfterModel,

    #[error("year of manufacture max cannot be less than min")]
    InvertedRange,
}

/// Filtro sobre un vehículo; inmutable una vez construido
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleFilter {
    BrandEquals(String),
    ModelPrefix(String),
    YearPairEquals { manufacturing: i32, model: i32 },
    YearRangeInclusive { min: i32, max: i32 },
    LotEquals(String),
}

impl VehicleFilter {
    pub fn brand(brand: &str) -> Self {
        VehicleFilter::BrandEquals(brand.to_uppercase())
    }

    pub fn model_prefix(prefix: &str) -> Self {
        VehicleFilter::ModelPrefix(prefix.to_uppercase())
    }

    pub fn year_pair(manufacturing: i32, model: i32) -> Result<Self, FilterError> {
        if manufacturing > model {
            return Err(FilterError::ManufacturingAfterModel);
        }
        Ok(VehicleFilter::YearPairEquals {
            manufacturing,
            model,
        })
    }

    pub fn year_range(min: i32, max: i32) -> Result<Self, FilterError> {
        if max < min {
            return Err(FilterError::InvertedRange);
        }
        Ok(VehicleFilter::YearRangeInclusive { min, max })
    }

    pub fn lot(lot_id: &str) -> Self {
        VehicleFilter::LotEquals(lot_id.to_string())
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehicleFilter::BrandEquals(brand) => vehicle.brand.to_uppercase() == *brand,
            VehicleFilter::ModelPrefix(prefix) => vehicle.model.to_uppercase().starts_with(prefix),
            VehicleFilter::YearPairEquals {
                manufacturing,
                model,
            } => vehicle.manufacturing_year == *manufacturing && vehicle.model_year == *model,
            VehicleFilter::YearRangeInclusive { min, max } => {
                (*min..=*max).contains(&vehicle.manufacturing_year)
            }
            VehicleFilter::LotEquals(lot_id) => vehicle.lot.id == *lot_id,
        }
    }
}

/// Conservar solo los vehículos que cumplen todos los filtros, en el mismo orden
pub fn apply_filters(vehicles: Vec<Vehicle>, filters: &[VehicleFilter]) -> Vec<Vehicle> {
    if filters.is_empty() {
        return vehicles;
    }
    vehicles
        .into_iter()
        .filter(|vehicle| filters.iter().all(|f| f.matches(vehicle)))
        .collect()
}
