use serde::Serialize;

/// Describes one numeric input collected for a calculation.
///
/// Every field shares the same lower bound of `0.0`; `default` and `step`
/// drive the input widgets of whichever front end collects the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputField {
    /// Machine name, used for CSV columns and `name=value` arguments.
    pub name: &'static str,
    /// Human readable label.
    pub label: &'static str,
    pub default: f64,
    pub step: f64,
}

impl InputField {
    pub const MIN_VALUE: f64 = 0.0;

    const fn new(
        name: &'static str,
        label: &'static str,
        default: f64,
        step: f64,
    ) -> Self {
        Self {
            name,
            label,
            default,
            step,
        }
    }
}

pub const OUTPUT: InputField = InputField::new("output", "Total Output", 1000.0, 100.0);
pub const TOTAL_INPUT: InputField = InputField::new("total_input", "Total Input", 800.0, 100.0);
pub const LABOUR_INPUT: InputField = InputField::new("labour_input", "Labour Input", 200.0, 50.0);
pub const MATERIAL_INPUT: InputField =
    InputField::new("material_input", "Material Input", 300.0, 50.0);
pub const CAPITAL_INPUT: InputField =
    InputField::new("capital_input", "Capital Input", 250.0, 50.0);
pub const MACHINE_INPUT: InputField =
    InputField::new("machine_input", "Machine Input", 150.0, 25.0);
pub const MISC_INPUT: InputField =
    InputField::new("misc_input", "Miscellaneous Input", 100.0, 25.0);
pub const HUMAN_INPUT: InputField = InputField::new("human_input", "Human Input", 200.0, 50.0);
pub const ENERGY_INPUT: InputField = InputField::new("energy_input", "Energy Input", 150.0, 25.0);
pub const NET_OUTPUT: InputField = InputField::new("net_output", "Net Output", 800.0, 100.0);
pub const WORKER_INPUT: InputField = InputField::new("worker_input", "Worker Input", 200.0, 50.0);
pub const DEMAND: InputField = InputField::new("demand", "Annual Demand (D)", 1000.0, 100.0);
pub const ORDERING_COST: InputField =
    InputField::new("ordering_cost", "Ordering Cost per Order (S)", 50.0, 10.0);
pub const HOLDING_COST: InputField =
    InputField::new("holding_cost", "Holding Cost per Unit per Year (H)", 2.0, 0.5);
