//! Expression trees, their rendering, evaluation and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use eval::{ROUNDING_SCALE, evaluate};
pub use parse::MAX_DEPTH;

#[cfg(test)]
mod tests;
