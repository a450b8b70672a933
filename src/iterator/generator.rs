use crate::expression::{Expression, Operator};

pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// Every binary operation over a pair of operands, in operator order
    pub fn generate_binary_ops(left: &Expression, right: &Expression) -> Vec<Expression> {
        Operator::ALL
            .iter()
            .map(|op| op.apply(left.clone(), right.clone()))
            .collect()
    }

    /// Every fully parenthesized expression over `operands`, keeping their order.
    ///
    /// For each split point the left and right slices are expanded
    /// recursively, then every left/right pair is combined with each operator.
    /// A single operand yields itself.
    pub fn generate_expressions(operands: &[Expression]) -> Vec<Expression> {
        match operands {
            [] => Vec::new(),
            [single] => vec![single.clone()],
            _ => {
                let mut results = Vec::new();
                for split in 1..operands.len() {
                    let (left, right) = operands.split_at(split);
                    let left_exprs = Self::generate_expressions(left);
                    let right_exprs = Self::generate_expressions(right);

                    for l in &left_exprs {
                        for r in &right_exprs {
                            results.extend(Self::generate_binary_ops(l, r));
                        }
                    }
                }
                results
            }
        }
    }
}
