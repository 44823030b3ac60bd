pub mod calculation;
pub mod formula;
pub mod problem;

pub use calculation::{CalculationResult, CalculationStep};
pub use formula::{Category, Difficulty, FormulaId, FormulaInfo, Operand2Contract};
pub use problem::Problem;
