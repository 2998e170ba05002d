use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::common::Ratio;
use super::eoq::calculate_eoq_checked;
use super::productivity::{
    capital_productivity_checked, labour_productivity_checked, machine_productivity_checked,
    material_productivity_checked, miscellaneous_productivity_checked,
    multifactor_productivity_checked, total_factor_productivity_checked,
    total_productivity_checked,
};
use crate::models::{CalculationInput, CalculationKind};

/// Errors raised when calculation inputs fall outside the non-negative domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalculationError {
    /// An input was below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// An input was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

/// The outcome of one validated calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub kind: CalculationKind,
    pub input: CalculationInput,
    pub value: Ratio,
}

impl Calculation {
    /// The result with the zero-denominator fallback applied.
    pub fn result(&self) -> f64 {
        self.value.value_or_zero()
    }
}

/// Validated entry point over the calculation functions.
///
/// The plain functions in [`productivity`](super::productivity) and
/// [`eoq`](super::eoq) accept any `f64`. `Calculator` rejects inputs
/// outside the non-negative finite domain before computing.
///
/// # Example
///
/// ```
/// use productivity_core::calculations::Calculator;
/// use productivity_core::CalculationInput;
///
/// let input = CalculationInput::TotalFactor {
///     net_output: 800.0,
///     worker_input: 200.0,
///     machine_input: 150.0,
/// };
///
/// let calc = Calculator::calculate(&input).unwrap();
/// assert!((calc.result() - 2.285_714).abs() < 1e-6);
/// ```
pub struct Calculator;

impl Calculator {
    /// Checks every field of `input` is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending field in the kind's field order.
    pub fn validate(input: &CalculationInput) -> Result<(), CalculationError> {
        for (field, value) in input.values() {
            if !value.is_finite() {
                return Err(CalculationError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(CalculationError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Validates `input` and computes its ratio or order quantity.
    ///
    /// A zero denominator is not an error; it comes back as
    /// [`Ratio::Undefined`].
    ///
    /// Validation only checks the inputs. Very large finite inputs can still
    /// overflow, e.g. `demand = 1e200, ordering_cost = 1e200` gives an EOQ of
    /// `inf`, returned as `Ratio::Value(f64::INFINITY)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if any input is negative, NaN or infinite.
    pub fn calculate(input: &CalculationInput) -> Result<Calculation, CalculationError> {
        Self::validate(input)?;

        let value = Self::compute(input);
        let kind = input.kind();

        match value {
            Ratio::Value(v) if !v.is_finite() => {
                debug!(kind = kind.as_str(), result = v, "calculation overflowed")
            }
            Ratio::Value(v) => debug!(kind = kind.as_str(), result = v, "calculated"),
            Ratio::Undefined => {
                warn!(kind = kind.as_str(), "zero denominator, result undefined")
            }
        }

        Ok(Calculation {
            kind,
            input: *input,
            value,
        })
    }

    fn compute(input: &CalculationInput) -> Ratio {
        match *input {
            CalculationInput::Total {
                output,
                total_input,
            } => total_productivity_checked(output, total_input),
            CalculationInput::Labour {
                output,
                labour_input,
            } => labour_productivity_checked(output, labour_input),
            CalculationInput::Material {
                output,
                material_input,
            } => material_productivity_checked(output, material_input),
            CalculationInput::Capital {
                output,
                capital_input,
            } => capital_productivity_checked(output, capital_input),
            CalculationInput::Machine {
                output,
                machine_input,
            } => machine_productivity_checked(output, machine_input),
            CalculationInput::Miscellaneous { output, misc_input } => {
                miscellaneous_productivity_checked(output, misc_input)
            }
            CalculationInput::Multifactor {
                output,
                human_input,
                material_input,
                capital_input,
                energy_input,
                misc_input,
            } => multifactor_productivity_checked(
                output,
                human_input,
                material_input,
                capital_input,
                energy_input,
                misc_input,
            ),
            CalculationInput::TotalFactor {
                net_output,
                worker_input,
                machine_input,
            } => total_factor_productivity_checked(net_output, worker_input, machine_input),
            CalculationInput::EconomicOrderQuantity {
                demand,
                ordering_cost,
                holding_cost,
            } => calculate_eoq_checked(demand, ordering_cost, holding_cost),
        }
    }
}
