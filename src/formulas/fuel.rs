//! Fuel price impact

/// Monthly cost change from a per-gallon price change.
///
/// Linear with no clamping: a negative `delta_per_gallon` is a saving and
/// yields a negative result.
pub fn gas_impact(gallons_per_month: f64, delta_per_gallon: f64) -> f64 {
    gallons_per_month * delta_per_gallon
}
