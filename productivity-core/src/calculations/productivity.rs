//! Productivity ratios.
//!
//! | Measure | Formula |
//! |---------|---------|
//! | Total | output / total input |
//! | Labour | output / labour input |
//! | Material | output / material input |
//! | Capital | output / capital input |
//! | Machine | output / machine input |
//! | Miscellaneous | output / miscellaneous input |
//! | Multifactor | output / (human + material + capital + energy + misc) |
//! | Total factor | net output / (worker + machine) |
//!
//! Each measure comes in two forms. The `*_checked` form returns a
//! [`Ratio`] and reports a zero denominator as [`Ratio::Undefined`]. The
//! plain form returns `f64` and maps that case to `0.0`.
//!
//! None of these functions validate sign; negative inputs divide like any
//! other number. Use [`Calculator`](super::Calculator) for validated input.
//!
//! # Example
//!
//! ```
//! use productivity_core::calculations::{
//!     Ratio, labour_productivity, multifactor_productivity_checked,
//! };
//!
//! assert_eq!(labour_productivity(1000.0, 200.0), 5.0);
//! assert_eq!(labour_productivity(1000.0, 0.0), 0.0);
//!
//! let mfp = multifactor_productivity_checked(1000.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! assert_eq!(mfp, Ratio::Undefined);
//! ```

use super::common::{Ratio, checked_ratio};

pub fn total_productivity_checked(
    output: f64,
    total_input: f64,
) -> Ratio {
    checked_ratio(output, total_input)
}

/// Output per unit of total input. Returns `0.0` if `total_input` is zero.
pub fn total_productivity(
    output: f64,
    total_input: f64,
) -> f64 {
    total_productivity_checked(output, total_input).value_or_zero()
}

pub fn labour_productivity_checked(
    output: f64,
    labour_input: f64,
) -> Ratio {
    checked_ratio(output, labour_input)
}

/// Output per unit of labour. Returns `0.0` if `labour_input` is zero.
pub fn labour_productivity(
    output: f64,
    labour_input: f64,
) -> f64 {
    labour_productivity_checked(output, labour_input).value_or_zero()
}

pub fn material_productivity_checked(
    output: f64,
    material_input: f64,
) -> Ratio {
    checked_ratio(output, material_input)
}

/// Output per unit of material. Returns `0.0` if `material_input` is zero.
pub fn material_productivity(
    output: f64,
    material_input: f64,
) -> f64 {
    material_productivity_checked(output, material_input).value_or_zero()
}

pub fn capital_productivity_checked(
    output: f64,
    capital_input: f64,
) -> Ratio {
    checked_ratio(output, capital_input)
}

/// Output per unit of capital. Returns `0.0` if `capital_input` is zero.
pub fn capital_productivity(
    output: f64,
    capital_input: f64,
) -> f64 {
    capital_productivity_checked(output, capital_input).value_or_zero()
}

pub fn machine_productivity_checked(
    output: f64,
    machine_input: f64,
) -> Ratio {
    checked_ratio(output, machine_input)
}

/// Output per unit of machine time. Returns `0.0` if `machine_input` is zero.
pub fn machine_productivity(
    output: f64,
    machine_input: f64,
) -> f64 {
    machine_productivity_checked(output, machine_input).value_or_zero()
}

pub fn miscellaneous_productivity_checked(
    output: f64,
    misc_input: f64,
) -> Ratio {
    checked_ratio(output, misc_input)
}

/// Output per unit of miscellaneous input. Returns `0.0` if `misc_input` is zero.
pub fn miscellaneous_productivity(
    output: f64,
    misc_input: f64,
) -> f64 {
    miscellaneous_productivity_checked(output, misc_input).value_or_zero()
}

/// Output over the sum of the five input categories, summed left to right.
pub fn multifactor_productivity_checked(
    output: f64,
    human: f64,
    material: f64,
    capital: f64,
    energy: f64,
    misc: f64,
) -> Ratio {
    let total_input = human + material + capital + energy + misc;
    checked_ratio(output, total_input)
}

/// Returns `0.0` if the five inputs sum to zero.
pub fn multifactor_productivity(
    output: f64,
    human: f64,
    material: f64,
    capital: f64,
    energy: f64,
    misc: f64,
) -> f64 {
    multifactor_productivity_checked(output, human, material, capital, energy, misc)
        .value_or_zero()
}

pub fn total_factor_productivity_checked(
    net_output: f64,
    worker_input: f64,
    machine_input: f64,
) -> Ratio {
    checked_ratio(net_output, worker_input + machine_input)
}

/// Net output over worker plus machine input. Returns `0.0` if that sum is zero.
pub fn total_factor_productivity(
    net_output: f64,
    worker_input: f64,
    machine_input: f64,
) -> f64 {
    total_factor_productivity_checked(net_output, worker_input, machine_input).value_or_zero()
}
