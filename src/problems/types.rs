use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }
}

/// An arithmetic problem gating a dig or a superpower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub question: String,
    pub answer: i64,
    /// Depth-derived difficulty, also used to scale chest gold.
    pub difficulty: u32,
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
    /// Multiple-choice hints for shallow problems, shuffled.
    pub hints: Option<[i64; 3]>,
}

impl Problem {
    pub fn new(operation: Operation, lhs: i64, rhs: i64, answer: i64, difficulty: u32) -> Self {
        Self {
            question: format!("{} {} {} = ?", lhs, operation.symbol(), rhs),
            answer,
            difficulty,
            operation,
            lhs,
            rhs,
            hints: None,
        }
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        self.answer == answer
    }
}

pub fn check_answer(problem: &Problem, answer: i64) -> bool {
    problem.is_correct(answer)
}
