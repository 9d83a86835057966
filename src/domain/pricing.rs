use crate::models::package_type::{PackageType, UnitType};

/// Derive a shipment's cost from its package type's pricing rule.
///
/// WEIGHT and VOLUME price by the measured quantity, defaulting to one unit
/// when the measure was not captured. ITEM_COUNT prices by piece count.
/// FLAT_RATE ignores all three inputs. Pure function of its arguments.
pub fn calculate_cost(
    package_type: &PackageType,
    quantity: u32,
    weight: Option<f64>,
    volume: Option<f64>,
) -> f64 {
    match package_type.unit_type {
        UnitType::Weight => weight.unwrap_or(1.0) * package_type.price_per_unit,
        UnitType::Volume => volume.unwrap_or(1.0) * package_type.price_per_unit,
        UnitType::ItemCount => f64::from(quantity) * package_type.price_per_unit,
        UnitType::FlatRate => package_type.price_per_unit,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use uuid::Uuid;

    use super::calculate_cost;
    use crate::error::AppError;
    use crate::models::package_type::{PackageType, UnitType};

    fn package_type(unit_type: UnitType, price_per_unit: f64) -> PackageType {
        PackageType {
            id: Uuid::from_u128(1),
            name: "test".to_string(),
            unit_type,
            price_per_unit,
        }
    }

    #[test]
    fn weight_pricing_multiplies_weight_by_unit_price() {
        let pt = package_type(UnitType::Weight, 500.0);
        assert_eq!(calculate_cost(&pt, 1, Some(3.0), None), 1500.0);
    }

    #[test]
    fn weight_pricing_defaults_missing_weight_to_one_unit() {
        let pt = package_type(UnitType::Weight, 500.0);
        assert_eq!(calculate_cost(&pt, 1, None, None), 500.0);
    }

    #[test]
    fn volume_pricing_multiplies_volume_by_unit_price() {
        let pt = package_type(UnitType::Volume, 200.0);
        assert_eq!(calculate_cost(&pt, 3, None, Some(2.5)), 500.0);
    }

    #[test]
    fn flat_rate_ignores_quantity_weight_and_volume() {
        let pt = package_type(UnitType::FlatRate, 2000.0);
        assert_eq!(calculate_cost(&pt, 5, Some(10.0), Some(10.0)), 2000.0);
    }

    #[test]
    fn item_count_multiplies_quantity_by_unit_price() {
        let pt = package_type(UnitType::ItemCount, 100.0);
        assert_eq!(calculate_cost(&pt, 4, None, None), 400.0);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let pt = package_type(UnitType::Weight, 750.0);
        let first = calculate_cost(&pt, 2, Some(1.2), Some(0.3));
        let second = calculate_cost(&pt, 2, Some(1.2), Some(0.3));
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_unit_type_is_an_invalid_pricing_rule() {
        let err = UnitType::from_str("PER_PARCEL").unwrap_err();
        assert!(matches!(err, AppError::InvalidPricingRule(s) if s == "PER_PARCEL"));
    }

    #[test]
    fn unit_type_parsing_is_case_insensitive() {
        assert_eq!(UnitType::from_str("weight").unwrap(), UnitType::Weight);
        assert_eq!(UnitType::from_str("flat_rate").unwrap(), UnitType::FlatRate);
    }
}
