//! Productivity ratios, Economic Order Quantity, and per-session
//! calculation history.
//!
//! ```
//! use productivity_core::{CalculationInput, CalculationKind, Session};
//! use productivity_core::calculations::Calculator;
//! use productivity_core::format::format_calculation;
//!
//! let mut session = Session::default();
//! let input = CalculationInput::defaults(CalculationKind::Total);
//! let calc = Calculator::calculate(&input).unwrap();
//!
//! assert_eq!(format_calculation(&calc), "125.00%");
//! session.record(&calc);
//! assert_eq!(session.recent(5).len(), 1);
//! ```

pub mod calculations;
pub mod charts;
pub mod format;
pub mod history;
pub mod models;
pub mod session;

pub use calculations::{Calculation, CalculationError, Calculator, Ratio};
pub use charts::{ChartSpec, ChartType};
pub use history::{DEFAULT_RECENT, HistoryError, HistoryStore, RetentionPolicy};
pub use models::*;
pub use session::Session;
