use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Scale used to round evaluated values to six decimal places
pub const ROUNDING_SCALE: f64 = 1e6;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[inline]
fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Round half away from zero at the given scale
#[inline]
pub(crate) fn round_to_scale(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

#[inline]
fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NonFinite)
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to zero, or when any
    /// intermediate value is not a finite number.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => finite(*n),
            Expression::Add(l, r) => finite(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => finite(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => finite(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    trace!("Division by zero in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    finite(left / right)
                }
            }
        }
    }

    /// Evaluate and round to six decimal places, or `None` if the expression
    /// has no value.
    pub fn evaluate_rounded(&self) -> Option<f64> {
        self.evaluate_with_scale(ROUNDING_SCALE)
    }

    fn evaluate_with_scale(&self, scale: f64) -> Option<f64> {
        match self.evaluate() {
            Ok(value) => Some(round_to_scale(value, scale)),
            Err(e) => {
                trace!("Expression {} has no value: {}", self, e);
                None
            }
        }
    }

    /// The integer this expression evaluates to after rounding, if any.
    pub fn integer_value(&self) -> Option<i64> {
        self.integer_value_with_scale(ROUNDING_SCALE)
    }

    pub(crate) fn integer_value_with_scale(&self, scale: f64) -> Option<i64> {
        self.evaluate_with_scale(scale)
            .filter(|v| is_integer(*v))
            .map(|v| v as i64)
    }
}

/// Parse and evaluate expression text, rounding to six decimal places.
///
/// Returns `None` when the text is not a well-formed expression or when it
/// has no value.
pub fn evaluate(text: &str) -> Option<f64> {
    match text.parse::<Expression>() {
        Ok(expr) => expr.evaluate_rounded(),
        Err(e) => {
            trace!("Cannot evaluate '{}': {}", text, e);
            None
        }
    }
}
