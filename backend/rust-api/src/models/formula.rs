use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of every technique the trainer knows how to narrate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormulaId {
    #[serde(rename = "add-simple")]
    AddSimple,
    #[serde(rename = "add-5")]
    Add5,
    #[serde(rename = "add-6-to-9")]
    Add6To9,
    #[serde(rename = "add-10")]
    Add10,
    #[serde(rename = "add-complement")]
    AddComplement,
    #[serde(rename = "subtract-simple")]
    SubtractSimple,
    #[serde(rename = "subtract-5")]
    Subtract5,
    #[serde(rename = "subtract-6-to-9")]
    Subtract6To9,
    #[serde(rename = "subtract-10")]
    Subtract10,
    #[serde(rename = "subtract-complement")]
    SubtractComplement,
    #[serde(rename = "multiply-2")]
    Multiply2,
    #[serde(rename = "multiply-5")]
    Multiply5,
    #[serde(rename = "multiply-9")]
    Multiply9,
    #[serde(rename = "multiply-10")]
    Multiply10,
    #[serde(rename = "multiply-11")]
    Multiply11,
    #[serde(rename = "multiply-25")]
    Multiply25,
    #[serde(rename = "multiply-125")]
    Multiply125,
    #[serde(rename = "divide-2")]
    Divide2,
    #[serde(rename = "divide-4")]
    Divide4,
    #[serde(rename = "divide-5")]
    Divide5,
    #[serde(rename = "divide-8")]
    Divide8,
    #[serde(rename = "divide-10")]
    Divide10,
}

impl FormulaId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaId::AddSimple => "add-simple",
            FormulaId::Add5 => "add-5",
            FormulaId::Add6To9 => "add-6-to-9",
            FormulaId::Add10 => "add-10",
            FormulaId::AddComplement => "add-complement",
            FormulaId::SubtractSimple => "subtract-simple",
            FormulaId::Subtract5 => "subtract-5",
            FormulaId::Subtract6To9 => "subtract-6-to-9",
            FormulaId::Subtract10 => "subtract-10",
            FormulaId::SubtractComplement => "subtract-complement",
            FormulaId::Multiply2 => "multiply-2",
            FormulaId::Multiply5 => "multiply-5",
            FormulaId::Multiply9 => "multiply-9",
            FormulaId::Multiply10 => "multiply-10",
            FormulaId::Multiply11 => "multiply-11",
            FormulaId::Multiply25 => "multiply-25",
            FormulaId::Multiply125 => "multiply-125",
            FormulaId::Divide2 => "divide-2",
            FormulaId::Divide4 => "divide-4",
            FormulaId::Divide5 => "divide-5",
            FormulaId::Divide8 => "divide-8",
            FormulaId::Divide10 => "divide-10",
        }
    }

    /// The constant right-hand side of unary formulas (`+5`, `×9`, `÷8`).
    /// Binary formulas take their second operand from the caller instead.
    pub fn implicit_operand(&self) -> Option<u64> {
        match self {
            FormulaId::Add5 | FormulaId::Subtract5 | FormulaId::Multiply5 | FormulaId::Divide5 => {
                Some(5)
            }
            FormulaId::Add10
            | FormulaId::Subtract10
            | FormulaId::Multiply10
            | FormulaId::Divide10 => Some(10),
            FormulaId::Multiply2 | FormulaId::Divide2 => Some(2),
            FormulaId::Multiply9 => Some(9),
            FormulaId::Multiply11 => Some(11),
            FormulaId::Multiply25 => Some(25),
            FormulaId::Multiply125 => Some(125),
            FormulaId::Divide4 => Some(4),
            FormulaId::Divide8 => Some(8),
            FormulaId::AddSimple
            | FormulaId::Add6To9
            | FormulaId::AddComplement
            | FormulaId::SubtractSimple
            | FormulaId::Subtract6To9
            | FormulaId::SubtractComplement => None,
        }
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaId {
    type Err = String;

    /// Accepts `add-6-to-9` as well as `ADD_6_TO_9`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "add-simple" => Ok(FormulaId::AddSimple),
            "add-5" => Ok(FormulaId::Add5),
            "add-6-to-9" => Ok(FormulaId::Add6To9),
            "add-10" => Ok(FormulaId::Add10),
            "add-complement" => Ok(FormulaId::AddComplement),
            "subtract-simple" => Ok(FormulaId::SubtractSimple),
            "subtract-5" => Ok(FormulaId::Subtract5),
            "subtract-6-to-9" => Ok(FormulaId::Subtract6To9),
            "subtract-10" => Ok(FormulaId::Subtract10),
            "subtract-complement" => Ok(FormulaId::SubtractComplement),
            "multiply-2" => Ok(FormulaId::Multiply2),
            "multiply-5" => Ok(FormulaId::Multiply5),
            "multiply-9" => Ok(FormulaId::Multiply9),
            "multiply-10" => Ok(FormulaId::Multiply10),
            "multiply-11" => Ok(FormulaId::Multiply11),
            "multiply-25" => Ok(FormulaId::Multiply25),
            "multiply-125" => Ok(FormulaId::Multiply125),
            "divide-2" => Ok(FormulaId::Divide2),
            "divide-4" => Ok(FormulaId::Divide4),
            "divide-5" => Ok(FormulaId::Divide5),
            "divide-8" => Ok(FormulaId::Divide8),
            "divide-10" => Ok(FormulaId::Divide10),
            _ => Err(format!("Unknown formula: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Add,
    Sub,
    Mul,
    Div,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Add => "add",
            Category::Sub => "sub",
            Category::Mul => "mul",
            Category::Div => "div",
        }
    }

    /// Operator shown in question text and summaries.
    pub fn symbol(&self) -> &'static str {
        match self {
            Category::Add => "+",
            Category::Sub => "-",
            Category::Mul => "×",
            Category::Div => "÷",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "add" | "addition" => Ok(Category::Add),
            "sub" | "subtract" | "subtraction" => Ok(Category::Sub),
            "mul" | "multiply" | "multiplication" => Ok(Category::Mul),
            "div" | "divide" | "division" => Ok(Category::Div),
            _ => Err(format!("Invalid category: {}", value)),
        }
    }
}

/// Ordered difficulty tiers: `Beginner < Intermediate < Advanced < Expert`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    /// Inclusive operand magnitude used by the problem generator.
    pub fn operand_range(&self) -> (u64, u64) {
        match self {
            Difficulty::Beginner => (10, 99),
            Difficulty::Intermediate => (10, 999),
            Difficulty::Advanced => (100, 9_999),
            Difficulty::Expert => (1_000, 999_999),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(format!("Invalid difficulty: {}", value)),
        }
    }
}

/// What a formula expects as its second operand.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operand2Contract {
    /// Unary formula; the right-hand side is implied by the formula itself.
    None,
    /// A single-digit amount in `[min, max]`.
    Range { min: u64, max: u64 },
    /// Any value inside the formula's digit-count range.
    Digits,
}

/// One catalog row.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaInfo {
    pub id: FormulaId,
    pub title: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub min_digits: u32,
    pub max_digits: u32,
    pub operand2: Operand2Contract,
    pub hint: &'static str,
}

impl FormulaInfo {
    pub fn is_unary(&self) -> bool {
        self.operand2 == Operand2Contract::None
    }

    /// Smallest and largest operand1 the digit range admits.
    pub fn operand_bounds(&self) -> (u64, u64) {
        let min = if self.min_digits <= 1 {
            0
        } else {
            10u64.pow(self.min_digits - 1)
        };
        let max = 10u64.pow(self.max_digits) - 1;
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_id_parses_both_spellings() {
        assert_eq!("add-6-to-9".parse::<FormulaId>(), Ok(FormulaId::Add6To9));
        assert_eq!("ADD_SIMPLE".parse::<FormulaId>(), Ok(FormulaId::AddSimple));
        assert_eq!(
            " Multiply-125 ".parse::<FormulaId>(),
            Ok(FormulaId::Multiply125)
        );
        assert!("add-7".parse::<FormulaId>().is_err());
    }

    #[test]
    fn formula_id_serializes_as_kebab_string() {
        let json = serde_json::to_string(&FormulaId::Subtract6To9).unwrap();
        assert_eq!(json, "\"subtract-6-to-9\"");
        let parsed: FormulaId = serde_json::from_str("\"divide-10\"").unwrap();
        assert_eq!(parsed, FormulaId::Divide10);
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for id in [
            FormulaId::AddSimple,
            FormulaId::Subtract10,
            FormulaId::Multiply25,
            FormulaId::Divide8,
        ] {
            assert_eq!(id.as_str().parse::<FormulaId>(), Ok(id));
        }
    }

    #[test]
    fn difficulty_is_ordered() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Advanced < Difficulty::Expert);
        assert_eq!("EXPERT".parse::<Difficulty>(), Ok(Difficulty::Expert));
    }

    #[test]
    fn unary_formulas_carry_their_constant() {
        assert_eq!(FormulaId::Multiply9.implicit_operand(), Some(9));
        assert_eq!(FormulaId::Divide10.implicit_operand(), Some(10));
        assert_eq!(FormulaId::AddComplement.implicit_operand(), None);
    }
}
