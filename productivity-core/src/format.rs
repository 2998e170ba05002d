//! Text formatting of calculation results.

use crate::calculations::{Calculation, Ratio};
use crate::models::{CalculationKind, CalculationRecord, ResultFormat};

/// Suffix appended to results whose denominator was zero.
pub const UNDEFINED_NOTE: &str = " (undefined: zero denominator)";

/// Formats `value` the way `kind` presents its results.
///
/// ```
/// use productivity_core::CalculationKind;
/// use productivity_core::format::format_value;
///
/// assert_eq!(format_value(CalculationKind::Total, 1.25), "125.00%");
/// assert_eq!(format_value(CalculationKind::EconomicOrderQuantity, 223.6068), "223.61 units");
/// ```
pub fn format_value(
    kind: CalculationKind,
    value: f64,
) -> String {
    match kind.result_format() {
        ResultFormat::Percentage => format!("{:.2}%", value * 100.0),
        ResultFormat::Units => format!("{value:.2} units"),
    }
}

/// Formats a tagged result, marking the zero-denominator fallback.
pub fn format_ratio(
    kind: CalculationKind,
    ratio: Ratio,
) -> String {
    match ratio {
        Ratio::Value(v) => format_value(kind, v),
        Ratio::Undefined => format!("{}{UNDEFINED_NOTE}", format_value(kind, 0.0)),
    }
}

pub fn format_calculation(calc: &Calculation) -> String {
    format_ratio(calc.kind, calc.value)
}

/// One line of the recent-calculations panel: `"{label}: {result}"`.
pub fn format_record(record: &CalculationRecord) -> String {
    let kind = record.calculation_type();
    format!("{}: {}", kind.label(), format_value(kind, record.result()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percentage_uses_two_decimals() {
        assert_eq!(format_value(CalculationKind::Labour, 5.0), "500.00%");
        assert_eq!(format_value(CalculationKind::TotalFactor, 800.0 / 350.0), "228.57%");
        assert_eq!(format_value(CalculationKind::Multifactor, 0.0), "0.00%");
    }

    #[test]
    fn eoq_uses_units() {
        let eoq = 50_000.0_f64.sqrt();

        assert_eq!(
            format_value(CalculationKind::EconomicOrderQuantity, eoq),
            "223.61 units"
        );
    }

    #[test]
    fn undefined_ratio_shows_zero_with_note() {
        let text = format_ratio(CalculationKind::Capital, Ratio::Undefined);

        assert_eq!(text, "0.00% (undefined: zero denominator)");
    }

    #[test]
    fn undefined_eoq_shows_zero_units_with_note() {
        let text = format_ratio(CalculationKind::EconomicOrderQuantity, Ratio::Undefined);

        assert_eq!(text, "0.00 units (undefined: zero denominator)");
    }

    #[test]
    fn record_line_has_label_and_result() {
        let record = CalculationRecord::new(Utc::now(), CalculationKind::Machine, 0.85);

        assert_eq!(format_record(&record), "Machine Productivity: 85.00%");
    }
}
