use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::input_field::{
    CAPITAL_INPUT, DEMAND, ENERGY_INPUT, HOLDING_COST, HUMAN_INPUT, InputField, LABOUR_INPUT,
    MACHINE_INPUT, MATERIAL_INPUT, MISC_INPUT, NET_OUTPUT, ORDERING_COST, OUTPUT, TOTAL_INPUT,
    WORKER_INPUT,
};

/// Error returned when a string is not a known calculation kind code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown calculation kind '{0}' (expected one of: {codes})", codes = CalculationKind::codes())]
pub struct ParseKindError(pub String);

/// How a calculation result is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFormat {
    /// Ratio shown as a percentage with two decimals (`1.25` → `125.00%`).
    Percentage,
    /// Quantity shown with two decimals followed by `units`.
    Units,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationKind {
    #[default]
    #[serde(rename = "total")]
    Total,
    #[serde(rename = "labour")]
    Labour,
    #[serde(rename = "material")]
    Material,
    #[serde(rename = "capital")]
    Capital,
    #[serde(rename = "machine")]
    Machine,
    #[serde(rename = "misc")]
    Miscellaneous,
    #[serde(rename = "multifactor")]
    Multifactor,
    #[serde(rename = "tfp")]
    TotalFactor,
    #[serde(rename = "eoq")]
    EconomicOrderQuantity,
}

impl CalculationKind {
    /// Every kind, in selection-menu order.
    pub const ALL: [CalculationKind; 9] = [
        Self::Total,
        Self::Labour,
        Self::Material,
        Self::Capital,
        Self::Machine,
        Self::Miscellaneous,
        Self::Multifactor,
        Self::TotalFactor,
        Self::EconomicOrderQuantity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Labour => "labour",
            Self::Material => "material",
            Self::Capital => "capital",
            Self::Machine => "machine",
            Self::Miscellaneous => "misc",
            Self::Multifactor => "multifactor",
            Self::TotalFactor => "tfp",
            Self::EconomicOrderQuantity => "eoq",
        }
    }

    /// Parses a short code. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Total => "Total Productivity",
            Self::Labour => "Labour Productivity",
            Self::Material => "Material Productivity",
            Self::Capital => "Capital Productivity",
            Self::Machine => "Machine Productivity",
            Self::Miscellaneous => "Miscellaneous Productivity",
            Self::Multifactor => "Multifactor Productivity",
            Self::TotalFactor => "Total Factor Productivity",
            Self::EconomicOrderQuantity => "Economic Order Quantity (EOQ)",
        }
    }

    pub fn result_format(&self) -> ResultFormat {
        match self {
            Self::EconomicOrderQuantity => ResultFormat::Units,
            _ => ResultFormat::Percentage,
        }
    }

    /// Input fields for this kind, in the order they are collected.
    pub fn fields(&self) -> &'static [InputField] {
        match self {
            Self::Total => &[OUTPUT, TOTAL_INPUT],
            Self::Labour => &[OUTPUT, LABOUR_INPUT],
            Self::Material => &[OUTPUT, MATERIAL_INPUT],
            Self::Capital => &[OUTPUT, CAPITAL_INPUT],
            Self::Machine => &[OUTPUT, MACHINE_INPUT],
            Self::Miscellaneous => &[OUTPUT, MISC_INPUT],
            Self::Multifactor => &[
                OUTPUT,
                HUMAN_INPUT,
                MATERIAL_INPUT,
                CAPITAL_INPUT,
                ENERGY_INPUT,
                MISC_INPUT,
            ],
            Self::TotalFactor => &[NET_OUTPUT, WORKER_INPUT, MACHINE_INPUT],
            Self::EconomicOrderQuantity => &[DEMAND, ORDERING_COST, HOLDING_COST],
        }
    }

    /// Looks up one of this kind's input fields by name.
    pub fn field(
        &self,
        name: &str,
    ) -> Option<&'static InputField> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Short guidance shown next to the calculator.
    pub fn tip(&self) -> &'static str {
        match self {
            Self::Total => "Total productivity measures overall efficiency of all inputs combined.",
            Self::Labour => {
                "Labour productivity indicates how efficiently human resources are utilized."
            }
            Self::Material => {
                "Material productivity shows how effectively materials are converted to output."
            }
            Self::EconomicOrderQuantity => {
                "EOQ helps optimize inventory costs by balancing ordering and holding costs."
            }
            _ => "Use these metrics to identify areas for improvement and optimization.",
        }
    }

    fn codes() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseKindError(s.to_string()))
    }
}
