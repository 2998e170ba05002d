//! Productivity and inventory calculations.
//!
//! The plain functions are total over `f64`: a zero denominator yields `0.0`
//! and no input is validated. [`Calculator`] wraps them with input
//! validation and returns a tagged [`Ratio`].

pub mod calculator;
pub mod common;
pub mod eoq;
pub mod productivity;

pub use calculator::{Calculation, CalculationError, Calculator};
pub use common::{Ratio, checked_ratio};
pub use eoq::{CostPoint, annual_cost, calculate_eoq, calculate_eoq_checked, cost_curve};
pub use productivity::*;
