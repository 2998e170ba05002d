//! Plain-text rendering for terminal output.

use productivity_core::charts::{ChartData, ChartSpec};
use productivity_core::format::{format_calculation, format_record};
use productivity_core::{Calculation, CalculationKind, CalculationRecord};

/// Metric line, chart summary and tip for one calculation.
///
/// ```text
/// Labour Productivity: 500.00%
/// Chart: Output vs Labour Input [bar]
///   Output: 1000.00
///   Labour Input: 200.00
/// Tip: Labour productivity indicates how efficiently human resources are utilized.
/// ```
pub fn render_calculation(calc: &Calculation) -> String {
    let mut lines = vec![metric_line(calc)];
    lines.extend(chart_lines(&ChartSpec::for_calculation(calc)));
    lines.push(format!("Tip: {}", calc.kind.tip()));
    lines.join("\n")
}

pub fn metric_line(calc: &Calculation) -> String {
    format!("{}: {}", calc.kind.label(), format_calculation(calc))
}

pub fn chart_lines(spec: &ChartSpec) -> Vec<String> {
    let mut lines = vec![format!("Chart: {} [{}]", spec.title, spec.chart_type.as_str())];

    match &spec.data {
        ChartData::Gauge(gauge) => lines.push(format!(
            "  {:.2} on 0-{:.0} (reference {:.0})",
            gauge.value, gauge.axis_max, gauge.reference
        )),
        ChartData::Categories { points } => {
            lines.extend(points.iter().map(|p| format!("  {}: {:.2}", p.label, p.value)));
        }
        ChartData::Scatter { points, trend } => {
            lines.extend(
                points
                    .iter()
                    .map(|p| format!("  point ({:.2}, {:.2})", p.x, p.y)),
            );
            if let (Some(from), Some(to)) = (trend.first(), trend.last()) {
                lines.push(format!(
                    "  efficiency line ({:.2}, {:.2}) to ({:.2}, {:.2})",
                    from.x, from.y, to.x, to.y
                ));
            }
        }
        ChartData::CostCurve { points, eoq } => {
            let cheapest = points
                .iter()
                .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
            match cheapest {
                Some(p) => lines.push(format!(
                    "  {} points, lowest sampled cost {:.2} at {:.0} units, EOQ {:.2}",
                    points.len(),
                    p.total_cost,
                    p.quantity,
                    eoq
                )),
                None => lines.push("  no cost curve for this EOQ".to_string()),
            }
        }
    }

    lines
}

/// The recent-calculations panel.
pub fn recent_lines<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CalculationRecord>,
{
    let mut lines = vec!["Recent calculations:".to_string()];
    let before = lines.len();
    lines.extend(records.into_iter().map(|r| format!("  {}", format_record(r))));
    if lines.len() == before {
        lines.push("  (none)".to_string());
    }
    lines
}

/// Full history with timestamps, oldest first.
pub fn history_lines<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CalculationRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(idx, r)| {
            format!(
                "{:>3}. {} {}",
                idx + 1,
                r.timestamp().format("%Y-%m-%d %H:%M:%S"),
                format_record(r)
            )
        })
        .collect()
}

/// Every kind with its code and input defaults.
pub fn kinds_lines() -> Vec<String> {
    CalculationKind::ALL
        .iter()
        .map(|kind| {
            let fields = kind
                .fields()
                .iter()
                .map(|f| format!("{}={}", f.name, f.default))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{:<12} {:<32} {fields}", kind.as_str(), kind.label())
        })
        .collect()
}
