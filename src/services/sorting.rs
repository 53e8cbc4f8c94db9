//! Orden por fecha de la última puja

use std::str::FromStr;

use crate::models::vehicle::Vehicle;

/// Dirección de orden pedida por el cliente (`bidOrder`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl FromStr for SortDirection {
    type Err = std::convert::Infallible;

    /// `asc` ordena ascendente; cualquier otro valor no vacío, descendente
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Ok(if value.is_empty() {
            SortDirection::None
        } else if value == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        })
    }
}

impl SortDirection {
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Orden estable: las fechas iguales conservan el orden del legado
pub fn sort_by_bid_date(vehicles: &mut [Vehicle], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => vehicles.sort_by(|a, b| a.bid.date.cmp(&b.bid.date)),
        SortDirection::Descending => vehicles.sort_by(|a, b| b.bid.date.cmp(&a.bid.date)),
        SortDirection::None => {}
    }
}
