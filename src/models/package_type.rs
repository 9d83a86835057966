use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    Weight,
    Volume,
    FlatRate,
    ItemCount,
}

impl FromStr for UnitType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WEIGHT" => Ok(UnitType::Weight),
            "VOLUME" => Ok(UnitType::Volume),
            "FLAT_RATE" => Ok(UnitType::FlatRate),
            "ITEM_COUNT" => Ok(UnitType::ItemCount),
            other => Err(AppError::InvalidPricingRule(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageType {
    pub id: Uuid,
    pub name: String,
    pub unit_type: UnitType,
    pub price_per_unit: f64,
}
