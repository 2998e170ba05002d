//! Economic Order Quantity.
//!
//! EOQ is the order size that minimises the annual cost of ordering plus
//! holding inventory under constant demand:
//!
//! ```text
//! EOQ = sqrt(2 × D × S / H)
//! annual cost(q) = (D / q) × S + (q / 2) × H
//! ```
//!
//! where `D` is annual demand, `S` the cost per order and `H` the holding
//! cost per unit per year.
//!
//! # Example
//!
//! ```
//! use productivity_core::calculations::eoq::{calculate_eoq, cost_curve};
//!
//! let eoq = calculate_eoq(1000.0, 50.0, 2.0);
//! assert!((eoq - 223.606_797_749_979).abs() < 1e-9);
//!
//! let curve = cost_curve(1000.0, 50.0, 2.0, eoq);
//! assert_eq!(curve.len(), 8); // 50, 100, ..., 400
//! ```

use serde::{Deserialize, Serialize};

use super::common::Ratio;

/// Spacing between order quantities sampled by [`cost_curve`].
pub const COST_CURVE_STEP: u64 = 50;

/// Upper bound on the number of points [`cost_curve`] produces.
pub const MAX_COST_CURVE_POINTS: usize = 1_000;

/// EOQ, or [`Ratio::Undefined`] when `holding_cost` is zero.
///
/// Negative products under the square root yield `NaN`; validate inputs
/// first if that matters.
pub fn calculate_eoq_checked(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
) -> Ratio {
    if holding_cost == 0.0 {
        Ratio::Undefined
    } else {
        Ratio::Value(((2.0 * demand * ordering_cost) / holding_cost).sqrt())
    }
}

/// EOQ, returning `0.0` when `holding_cost` is zero.
pub fn calculate_eoq(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
) -> f64 {
    calculate_eoq_checked(demand, ordering_cost, holding_cost).value_or_zero()
}

/// Annual ordering plus holding cost when ordering `quantity` units at a time.
///
/// Returns `0.0` for a non-positive quantity.
pub fn annual_cost(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    quantity: f64,
) -> f64 {
    if quantity <= 0.0 {
        return 0.0;
    }
    let ordering = (demand / quantity) * ordering_cost;
    let holding = (quantity / 2.0) * holding_cost;
    ordering + holding
}

/// One sample of the total-cost curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub quantity: f64,
    pub total_cost: f64,
}

/// Samples [`annual_cost`] at `50, 100, 150, ...` strictly below `⌊2 × eoq⌋`.
///
/// The curve is empty when `eoq` is not a finite positive number or too
/// small to reach the first sample. At most [`MAX_COST_CURVE_POINTS`]
/// points are produced.
pub fn cost_curve(
    demand: f64,
    ordering_cost: f64,
    holding_cost: f64,
    eoq: f64,
) -> Vec<CostPoint> {
    if !eoq.is_finite() || eoq <= 0.0 {
        return Vec::new();
    }

    // `as` saturates, so enormous EOQ values stay bounded by the point cap.
    let end = (eoq * 2.0) as u64;

    (1..)
        .map(|i| i * COST_CURVE_STEP)
        .take_while(|&q| q < end)
        .take(MAX_COST_CURVE_POINTS)
        .map(|q| {
            let quantity = q as f64;
            CostPoint {
                quantity,
                total_cost: annual_cost(demand, ordering_cost, holding_cost, quantity),
            }
        })
        .collect()
}
