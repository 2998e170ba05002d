//! Renderer-neutral chart descriptions.
//!
//! Each calculation kind is paired with one chart. [`ChartSpec`] carries the
//! data a chart library needs to draw it; nothing in this crate draws.
//!
//! | Kind | Chart |
//! |------|-------|
//! | Total | gauge of result × 100 on a 0–150 axis |
//! | Labour | bar: output vs labour input |
//! | Material | pie: output vs material input |
//! | Capital | line: capital input → output |
//! | Machine | scatter point plus efficiency line |
//! | Miscellaneous | area: misc input → output |
//! | Multifactor | stacked bar of the five input factors |
//! | Total factor | donut: worker vs machine input |
//! | EOQ | total cost curve with the EOQ marked |

use serde::Serialize;

use crate::calculations::Calculation;
use crate::calculations::eoq::{CostPoint, cost_curve};
use crate::models::{CalculationInput, CalculationKind};

/// Gauge axis upper bound, in percent.
pub const GAUGE_AXIS_MAX: f64 = 150.0;
/// Gauge reference line, in percent.
pub const GAUGE_REFERENCE: f64 = 100.0;
/// Scale of the machine chart's efficiency line relative to the inputs.
pub const EFFICIENCY_LINE_SCALE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Gauge,
    Bar,
    Pie,
    Donut,
    Line,
    Scatter,
    Area,
    StackedBar,
    CostCurve,
}

impl ChartType {
    pub fn for_kind(kind: CalculationKind) -> Self {
        match kind {
            CalculationKind::Total => Self::Gauge,
            CalculationKind::Labour => Self::Bar,
            CalculationKind::Material => Self::Pie,
            CalculationKind::Capital => Self::Line,
            CalculationKind::Machine => Self::Scatter,
            CalculationKind::Miscellaneous => Self::Area,
            CalculationKind::Multifactor => Self::StackedBar,
            CalculationKind::TotalFactor => Self::Donut,
            CalculationKind::EconomicOrderQuantity => Self::CostCurve,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Area => "area",
            Self::StackedBar => "stacked_bar",
            Self::CostCurve => "cost_curve",
        }
    }

    /// Relative size of the hole for pie-style charts.
    pub fn hole(&self) -> Option<f64> {
        match self {
            Self::Pie => Some(0.4),
            Self::Donut => Some(0.6),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

/// A coloured range on the gauge, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub value: f64,
    pub axis_max: f64,
    pub reference: f64,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ChartData {
    Gauge(Gauge),
    Categories { points: Vec<CategoryPoint> },
    Scatter { points: Vec<XyPoint>, trend: Vec<XyPoint> },
    CostCurve { points: Vec<CostPoint>, eoq: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub title: &'static str,
    pub data: ChartData,
}

impl ChartSpec {
    /// Builds the chart that accompanies `calc`.
    pub fn for_calculation(calc: &Calculation) -> Self {
        let result = calc.result();
        let (title, data) = match calc.input {
            CalculationInput::Total { .. } => ("Productivity %", ChartData::Gauge(gauge(result))),
            CalculationInput::Labour {
                output,
                labour_input,
            } => (
                "Output vs Labour Input",
                categories(&[("Output", output), ("Labour Input", labour_input)]),
            ),
            CalculationInput::Material {
                output,
                material_input,
            } => (
                "Output vs Material Input Distribution",
                categories(&[("Output", output), ("Material Input", material_input)]),
            ),
            CalculationInput::Capital {
                output,
                capital_input,
            } => (
                "Capital Input to Output Flow",
                categories(&[("Capital Input", capital_input), ("Output", output)]),
            ),
            CalculationInput::Machine {
                output,
                machine_input,
            } => (
                "Machine Input vs Output",
                ChartData::Scatter {
                    points: vec![XyPoint {
                        x: machine_input,
                        y: output,
                    }],
                    trend: vec![
                        XyPoint { x: 0.0, y: 0.0 },
                        XyPoint {
                            x: machine_input * EFFICIENCY_LINE_SCALE,
                            y: output * EFFICIENCY_LINE_SCALE,
                        },
                    ],
                },
            ),
            CalculationInput::Miscellaneous { output, misc_input } => (
                "Miscellaneous Input to Output",
                categories(&[("Misc Input", misc_input), ("Output", output)]),
            ),
            CalculationInput::Multifactor {
                human_input,
                material_input,
                capital_input,
                energy_input,
                misc_input,
                ..
            } => (
                "Input Factors Breakdown",
                categories(&[
                    ("Human", human_input),
                    ("Material", material_input),
                    ("Capital", capital_input),
                    ("Energy", energy_input),
                    ("Misc", misc_input),
                ]),
            ),
            CalculationInput::TotalFactor {
                worker_input,
                machine_input,
                ..
            } => (
                "Input Distribution",
                categories(&[("Worker Input", worker_input), ("Machine Input", machine_input)]),
            ),
            CalculationInput::EconomicOrderQuantity {
                demand,
                ordering_cost,
                holding_cost,
            } => (
                "Total Cost vs Order Quantity",
                ChartData::CostCurve {
                    points: cost_curve(demand, ordering_cost, holding_cost, result),
                    eoq: result,
                },
            ),
        };

        Self {
            chart_type: ChartType::for_kind(calc.kind),
            title,
            data,
        }
    }
}

fn gauge(result: f64) -> Gauge {
    Gauge {
        value: result * 100.0,
        axis_max: GAUGE_AXIS_MAX,
        reference: GAUGE_REFERENCE,
        bands: vec![
            GaugeBand {
                from: 0.0,
                to: 50.0,
            },
            GaugeBand {
                from: 50.0,
                to: 100.0,
            },
            GaugeBand {
                from: 100.0,
                to: GAUGE_AXIS_MAX,
            },
        ],
    }
}

fn categories(pairs: &[(&'static str, f64)]) -> ChartData {
    ChartData::Categories {
        points: pairs
            .iter()
            .map(|&(label, value)| CategoryPoint { label, value })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::Calculator;

    fn chart_for(input: CalculationInput) -> ChartSpec {
        ChartSpec::for_calculation(&Calculator::calculate(&input).unwrap())
    }

    #[test]
    fn every_kind_gets_its_chart_type() {
        for kind in CalculationKind::ALL {
            let spec = chart_for(CalculationInput::defaults(kind));

            assert_eq!(spec.chart_type, ChartType::for_kind(kind));
        }
    }

    #[test]
    fn total_gauge_shows_percentage() {
        let spec = chart_for(CalculationInput::defaults(CalculationKind::Total));

        let ChartData::Gauge(gauge) = spec.data else {
            panic!("expected gauge");
        };
        assert_eq!(gauge.value, 125.0);
        assert_eq!(gauge.reference, 100.0);
        assert_eq!(gauge.bands.len(), 3);
    }

    #[test]
    fn capital_line_runs_from_input_to_output() {
        let spec = chart_for(CalculationInput::defaults(CalculationKind::Capital));

        assert_eq!(
            spec.data,
            ChartData::Categories {
                points: vec![
                    CategoryPoint {
                        label: "Capital Input",
                        value: 250.0,
                    },
                    CategoryPoint {
                        label: "Output",
                        value: 1000.0,
                    },
                ],
            }
        );
    }

    #[test]
    fn machine_scatter_has_scaled_efficiency_line() {
        let spec = chart_for(CalculationInput::defaults(CalculationKind::Machine));

        let ChartData::Scatter { points, trend } = spec.data else {
            panic!("expected scatter");
        };
        assert_eq!(points, vec![XyPoint { x: 150.0, y: 1000.0 }]);
        assert_eq!(trend[1], XyPoint { x: 225.0, y: 1500.0 });
    }

    #[test]
    fn multifactor_lists_five_factors() {
        let spec = chart_for(CalculationInput::defaults(CalculationKind::Multifactor));

        let ChartData::Categories { points } = spec.data else {
            panic!("expected categories");
        };
        let labels: Vec<_> = points.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Human", "Material", "Capital", "Energy", "Misc"]);
    }

    #[test]
    fn donut_and_pie_have_different_holes() {
        assert_eq!(ChartType::Pie.hole(), Some(0.4));
        assert_eq!(ChartType::Donut.hole(), Some(0.6));
        assert_eq!(ChartType::Bar.hole(), None);
    }

    #[test]
    fn eoq_chart_marks_eoq_on_cost_curve() {
        let spec = chart_for(CalculationInput::defaults(
            CalculationKind::EconomicOrderQuantity,
        ));

        let ChartData::CostCurve { points, eoq } = spec.data else {
            panic!("expected cost curve");
        };
        assert!((eoq - 223.606_797_749_979).abs() < 1e-9);
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn undefined_eoq_has_empty_curve() {
        let spec = chart_for(CalculationInput::EconomicOrderQuantity {
            demand: 1000.0,
            ordering_cost: 50.0,
            holding_cost: 0.0,
        });

        let ChartData::CostCurve { points, eoq } = spec.data else {
            panic!("expected cost curve");
        };
        assert_eq!(eoq, 0.0);
        assert!(points.is_empty());
    }

    #[test]
    fn spec_serializes_with_layout_tag() {
        let spec = chart_for(CalculationInput::defaults(CalculationKind::Labour));

        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["chart_type"], "bar");
        assert_eq!(json["data"]["layout"], "categories");
        assert_eq!(json["data"]["points"][1]["label"], "Labour Input");
    }
}
