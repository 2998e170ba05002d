use serde::{Deserialize, Serialize};

use super::calculation_kind::CalculationKind;
use super::input_field::{
    CAPITAL_INPUT, DEMAND, ENERGY_INPUT, HOLDING_COST, HUMAN_INPUT, InputField, LABOUR_INPUT,
    MACHINE_INPUT, MATERIAL_INPUT, MISC_INPUT, NET_OUTPUT, ORDERING_COST, OUTPUT, TOTAL_INPUT,
    WORKER_INPUT,
};

/// The inputs of a single calculation, one variant per [`CalculationKind`].
///
/// Values are expected to be non-negative. Nothing here enforces that;
/// [`Calculator::calculate`](crate::calculations::Calculator::calculate)
/// validates before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CalculationInput {
    #[serde(rename = "total")]
    Total { output: f64, total_input: f64 },

    #[serde(rename = "labour")]
    Labour { output: f64, labour_input: f64 },

    #[serde(rename = "material")]
    Material { output: f64, material_input: f64 },

    #[serde(rename = "capital")]
    Capital { output: f64, capital_input: f64 },

    #[serde(rename = "machine")]
    Machine { output: f64, machine_input: f64 },

    #[serde(rename = "misc")]
    Miscellaneous { output: f64, misc_input: f64 },

    #[serde(rename = "multifactor")]
    Multifactor {
        output: f64,
        human_input: f64,
        material_input: f64,
        capital_input: f64,
        energy_input: f64,
        misc_input: f64,
    },

    #[serde(rename = "tfp")]
    TotalFactor {
        net_output: f64,
        worker_input: f64,
        machine_input: f64,
    },

    #[serde(rename = "eoq")]
    EconomicOrderQuantity {
        demand: f64,
        ordering_cost: f64,
        holding_cost: f64,
    },
}

impl CalculationInput {
    pub fn kind(&self) -> CalculationKind {
        match self {
            Self::Total { .. } => CalculationKind::Total,
            Self::Labour { .. } => CalculationKind::Labour,
            Self::Material { .. } => CalculationKind::Material,
            Self::Capital { .. } => CalculationKind::Capital,
            Self::Machine { .. } => CalculationKind::Machine,
            Self::Miscellaneous { .. } => CalculationKind::Miscellaneous,
            Self::Multifactor { .. } => CalculationKind::Multifactor,
            Self::TotalFactor { .. } => CalculationKind::TotalFactor,
            Self::EconomicOrderQuantity { .. } => CalculationKind::EconomicOrderQuantity,
        }
    }

    /// The input with every field at its default value.
    pub fn defaults(kind: CalculationKind) -> Self {
        Self::from_fields(kind, |_| None)
    }

    /// Builds an input for `kind`, asking `lookup` for each field in turn.
    ///
    /// Fields for which `lookup` returns `None` take their default value.
    pub fn from_fields<F>(
        kind: CalculationKind,
        mut lookup: F,
    ) -> Self
    where
        F: FnMut(&InputField) -> Option<f64>,
    {
        let mut get = |field: InputField| lookup(&field).unwrap_or(field.default);

        match kind {
            CalculationKind::Total => Self::Total {
                output: get(OUTPUT),
                total_input: get(TOTAL_INPUT),
            },
            CalculationKind::Labour => Self::Labour {
                output: get(OUTPUT),
                labour_input: get(LABOUR_INPUT),
            },
            CalculationKind::Material => Self::Material {
                output: get(OUTPUT),
                material_input: get(MATERIAL_INPUT),
            },
            CalculationKind::Capital => Self::Capital {
                output: get(OUTPUT),
                capital_input: get(CAPITAL_INPUT),
            },
            CalculationKind::Machine => Self::Machine {
                output: get(OUTPUT),
                machine_input: get(MACHINE_INPUT),
            },
            CalculationKind::Miscellaneous => Self::Miscellaneous {
                output: get(OUTPUT),
                misc_input: get(MISC_INPUT),
            },
            CalculationKind::Multifactor => Self::Multifactor {
                output: get(OUTPUT),
                human_input: get(HUMAN_INPUT),
                material_input: get(MATERIAL_INPUT),
                capital_input: get(CAPITAL_INPUT),
                energy_input: get(ENERGY_INPUT),
                misc_input: get(MISC_INPUT),
            },
            CalculationKind::TotalFactor => Self::TotalFactor {
                net_output: get(NET_OUTPUT),
                worker_input: get(WORKER_INPUT),
                machine_input: get(MACHINE_INPUT),
            },
            CalculationKind::EconomicOrderQuantity => Self::EconomicOrderQuantity {
                demand: get(DEMAND),
                ordering_cost: get(ORDERING_COST),
                holding_cost: get(HOLDING_COST),
            },
        }
    }

    /// `(field name, value)` pairs in the kind's field order.
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Total {
                output,
                total_input,
            } => vec![(OUTPUT.name, output), (TOTAL_INPUT.name, total_input)],
            Self::Labour {
                output,
                labour_input,
            } => vec![(OUTPUT.name, output), (LABOUR_INPUT.name, labour_input)],
            Self::Material {
                output,
                material_input,
            } => vec![(OUTPUT.name, output), (MATERIAL_INPUT.name, material_input)],
            Self::Capital {
                output,
                capital_input,
            } => vec![(OUTPUT.name, output), (CAPITAL_INPUT.name, capital_input)],
            Self::Machine {
                output,
                machine_input,
            } => vec![(OUTPUT.name, output), (MACHINE_INPUT.name, machine_input)],
            Self::Miscellaneous { output, misc_input } => {
                vec![(OUTPUT.name, output), (MISC_INPUT.name, misc_input)]
            }
            Self::Multifactor {
                output,
                human_input,
                material_input,
                capital_input,
                energy_input,
                misc_input,
            } => vec![
                (OUTPUT.name, output),
                (HUMAN_INPUT.name, human_input),
                (MATERIAL_INPUT.name, material_input),
                (CAPITAL_INPUT.name, capital_input),
                (ENERGY_INPUT.name, energy_input),
                (MISC_INPUT.name, misc_input),
            ],
            Self::TotalFactor {
                net_output,
                worker_input,
                machine_input,
            } => vec![
                (NET_OUTPUT.name, net_output),
                (WORKER_INPUT.name, worker_input),
                (MACHINE_INPUT.name, machine_input),
            ],
            Self::EconomicOrderQuantity {
                demand,
                ordering_cost,
                holding_cost,
            } => vec![
                (DEMAND.name, demand),
                (ORDERING_COST.name, ordering_cost),
                (HOLDING_COST.name, holding_cost),
            ],
        }
    }
}
