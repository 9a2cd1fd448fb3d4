//! Measured quantities attached to spaces and equipment.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::MeasurementUnit;

/// A single value with its unit, e.g. a room area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measure {
    /// Unit of `value`.
    pub unit: MeasurementUnit,
    /// Magnitude.
    pub value: f64,
}

impl Measure {
    /// Creates a measure.
    #[must_use]
    pub const fn new(unit: MeasurementUnit, value: f64) -> Self {
        Self { unit, value }
    }

    /// Creates an area in square meters. Negative or non-finite values are rejected.
    pub fn area(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::validation(format!(
                "area must be a non-negative number, got {value}"
            )));
        }
        Ok(Self::new(MeasurementUnit::SquareMeters, value))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
