mod calculation_input;
mod calculation_kind;
mod calculation_record;
pub mod input_field;

pub use calculation_input::CalculationInput;
pub use calculation_kind::{CalculationKind, ParseKindError, ResultFormat};
pub use calculation_record::CalculationRecord;
pub use input_field::InputField;
