//! Process-wide, read-only table of every formula and its contract.
//!
//! The table is built once on first access and never mutated afterwards, so
//! any number of threads can read it without coordination.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::formula::{Category, Difficulty, FormulaId, FormulaInfo, Operand2Contract};

static FORMULAS: [FormulaInfo; 22] = [
    FormulaInfo {
        id: FormulaId::AddSimple,
        title: "Add 1 to 4",
        category: Category::Add,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::Range { min: 1, max: 4 },
        hint: "Move lower beads up. If the column overflows, add 10 and take away the complement.",
    },
    FormulaInfo {
        id: FormulaId::Add5,
        title: "Add 5 with the upper bead",
        category: Category::Add,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::None,
        hint: "Lower the upper bead. If it is already down, add 10 and raise it instead.",
    },
    FormulaInfo {
        id: FormulaId::Add6To9,
        title: "Add 6 to 9 as 5 plus the rest",
        category: Category::Add,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::Range { min: 6, max: 9 },
        hint: "Split the amount into 5 and what is left, then add each part.",
    },
    FormulaInfo {
        id: FormulaId::Add10,
        title: "Add 10",
        category: Category::Add,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::None,
        hint: "Leave the units alone and move one bead up in the tens column.",
    },
    FormulaInfo {
        id: FormulaId::AddComplement,
        title: "Column addition with carry",
        category: Category::Add,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::Digits,
        hint: "Work right to left and carry 1 whenever a column reaches 10.",
    },
    FormulaInfo {
        id: FormulaId::SubtractSimple,
        title: "Subtract 1 to 4",
        category: Category::Sub,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::Range { min: 1, max: 4 },
        hint: "Move lower beads down. If too few are up, borrow 10 and give back the complement.",
    },
    FormulaInfo {
        id: FormulaId::Subtract5,
        title: "Subtract 5 with the upper bead",
        category: Category::Sub,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::None,
        hint: "Raise the upper bead. If it is not down, borrow 10 and add 5 back.",
    },
    FormulaInfo {
        id: FormulaId::Subtract6To9,
        title: "Subtract 6 to 9 as 5 plus the rest",
        category: Category::Sub,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 6,
        operand2: Operand2Contract::Range { min: 6, max: 9 },
        hint: "Take away 5 first, then take away what is left.",
    },
    FormulaInfo {
        id: FormulaId::Subtract10,
        title: "Subtract 10",
        category: Category::Sub,
        difficulty: Difficulty::Beginner,
        min_digits: 2,
        max_digits: 6,
        operand2: Operand2Contract::None,
        hint: "Leave the units alone and move one bead down in the tens column.",
    },
    FormulaInfo {
        id: FormulaId::SubtractComplement,
        title: "Column subtraction with borrow",
        category: Category::Sub,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::Digits,
        hint: "Work right to left and borrow 10 from the next column when a digit is too small.",
    },
    FormulaInfo {
        id: FormulaId::Multiply2,
        title: "Double",
        category: Category::Mul,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Add the number to itself.",
    },
    FormulaInfo {
        id: FormulaId::Multiply5,
        title: "Multiply by 5 as ×10 ÷2",
        category: Category::Mul,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Append a zero, then halve.",
    },
    FormulaInfo {
        id: FormulaId::Multiply9,
        title: "Multiply by 9 as ×10 minus the number",
        category: Category::Mul,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Append a zero, then subtract the original number.",
    },
    FormulaInfo {
        id: FormulaId::Multiply10,
        title: "Multiply by 10",
        category: Category::Mul,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Shift every digit one column left and write 0 in the units.",
    },
    FormulaInfo {
        id: FormulaId::Multiply11,
        title: "Multiply by 11 as ×10 plus the number",
        category: Category::Mul,
        difficulty: Difficulty::Advanced,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Append a zero, then add the original number.",
    },
    FormulaInfo {
        id: FormulaId::Multiply25,
        title: "Multiply by 25 as ×100 ÷4",
        category: Category::Mul,
        difficulty: Difficulty::Advanced,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Append two zeros, then halve twice.",
    },
    FormulaInfo {
        id: FormulaId::Multiply125,
        title: "Multiply by 125 as ×1000 ÷8",
        category: Category::Mul,
        difficulty: Difficulty::Expert,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Append three zeros, then halve three times.",
    },
    FormulaInfo {
        id: FormulaId::Divide2,
        title: "Halve by long division",
        category: Category::Div,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Halve digit by digit, carrying a remainder of 1 as 10 into the next digit.",
    },
    FormulaInfo {
        id: FormulaId::Divide4,
        title: "Divide by 4 as halving twice",
        category: Category::Div,
        difficulty: Difficulty::Intermediate,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Halve, then halve again.",
    },
    FormulaInfo {
        id: FormulaId::Divide5,
        title: "Divide by 5 as ×2 ÷10",
        category: Category::Div,
        difficulty: Difficulty::Advanced,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Double the number, then drop the last zero.",
    },
    FormulaInfo {
        id: FormulaId::Divide8,
        title: "Divide by 8 as halving three times",
        category: Category::Div,
        difficulty: Difficulty::Expert,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Halve three times in a row.",
    },
    FormulaInfo {
        id: FormulaId::Divide10,
        title: "Divide by 10",
        category: Category::Div,
        difficulty: Difficulty::Beginner,
        min_digits: 1,
        max_digits: 9,
        operand2: Operand2Contract::None,
        hint: "Drop the units digit; anything left in the units is the remainder.",
    },
];

lazy_static! {
    static ref CATALOG: HashMap<FormulaId, &'static FormulaInfo> =
        FORMULAS.iter().map(|info| (info.id, info)).collect();
}

/// Catalog row for `id`. Every `FormulaId` has exactly one row.
pub fn formula_info(id: FormulaId) -> &'static FormulaInfo {
    CATALOG
        .get(&id)
        .copied()
        .unwrap_or_else(|| unreachable!("formula {} missing from catalog", id))
}

/// All formulas in catalog order.
pub fn all_formulas() -> &'static [FormulaInfo] {
    &FORMULAS
}

/// Formulas a student at `tier` may be drilled on.
pub fn formulas_up_to(tier: Difficulty) -> impl Iterator<Item = &'static FormulaInfo> {
    FORMULAS.iter().filter(move |info| info.difficulty <= tier)
}

pub fn formulas_in_category(category: Category) -> impl Iterator<Item = &'static FormulaInfo> {
    FORMULAS.iter().filter(move |info| info.category == category)
}
