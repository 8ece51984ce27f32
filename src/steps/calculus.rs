//! Arithmetic over number-input values.

use std::fmt;
use thiserror::Error;

/// An arithmetic fold applied left to right over the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Min,
    Max,
}

/// Why a calculation produced no result.
///
/// These are step-local: the display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Calculus step error: No inputs provided.")]
    NoInputs,

    #[error("Unknown operation.")]
    UnknownOperation(String),

    #[error("Error: Division by zero.")]
    DivisionByZero,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Min,
        Operation::Max,
    ];

    /// Parse an operation symbol.
    ///
    /// Accepts `+ - * /`, `min` / `m` and `max` / `M`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "min" | "m" => Some(Self::Min),
            "max" | "M" => Some(Self::Max),
            _ => None,
        }
    }

    /// Canonical symbol for this operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    fn apply(self, acc: f64, next: f64) -> Result<f64, CalcError> {
        Ok(match self {
            Self::Add => acc + next,
            Self::Subtract => acc - next,
            Self::Multiply => acc * next,
            Self::Divide if next == 0.0 => return Err(CalcError::DivisionByZero),
            Self::Divide => acc / next,
            Self::Min => acc.min(next),
            Self::Max => acc.max(next),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fold `values` left to right with the operation named by `symbol`.
///
/// Checks for empty input first, then for an unknown symbol, so the
/// reported reason does not depend on how many values there are.
pub fn evaluate(symbol: &str, values: &[f64]) -> Result<f64, CalcError> {
    let (first, rest) = values.split_first().ok_or(CalcError::NoInputs)?;
    let op = Operation::from_symbol(symbol)
        .ok_or_else(|| CalcError::UnknownOperation(symbol.to_string()))?;

    rest.iter().try_fold(*first, |acc, &next| op.apply(acc, next))
}
