use serde::{Deserialize, Serialize};

/// Threshold configuration for the outcome interpreter.
///
/// The cutoffs were inherited from the production rule set without a cited
/// agronomic derivation, so they are kept configurable rather than baked
/// into the rule bodies; [`Default`] carries the inherited values unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Rainfall above this is banded High (mm).
    pub rainfall_high_mm: f64,
    /// Rainfall above this (and at most the High bound) is Medium (mm).
    pub rainfall_medium_mm: f64,
    /// Temperature above this is banded High (degrees C).
    pub temp_high_c: f64,
    /// Temperature above this (and at most the High bound) is Medium.
    pub temp_medium_c: f64,
    /// Pesticide use above this is banded High.
    pub pesticides_high: f64,
    /// Pesticide use above this (and at most the High bound) is Medium.
    pub pesticides_medium: f64,
    /// Predicted yield below this raises the critical low-yield anomaly.
    pub critical_yield_floor: f64,
    /// Rainfall below this raises the drought warning (mm).
    pub drought_rainfall_mm: f64,
    /// Temperature above this raises the extreme-heat anomaly (degrees C).
    pub extreme_heat_c: f64,
    /// Rainfall below this triggers the irrigation recommendation (mm).
    pub irrigation_rainfall_mm: f64,
    /// Predicted yield below this triggers the fertilizer recommendation.
    pub fertilizer_yield_floor: f64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            rainfall_high_mm: 1000.0,
            rainfall_medium_mm: 500.0,
            temp_high_c: 25.0,
            temp_medium_c: 15.0,
            pesticides_high: 2.0,
            pesticides_medium: 1.0,
            critical_yield_floor: 1000.0,
            drought_rainfall_mm: 200.0,
            extreme_heat_c: 40.0,
            irrigation_rainfall_mm: 500.0,
            fertilizer_yield_floor: 3000.0,
        }
    }
}
