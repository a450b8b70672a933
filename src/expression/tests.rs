use crate::expression::{Expression, ExpressionError, MAX_DEPTH, Operator, evaluate};

fn num(n: f64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_display_leaf_is_bare() {
    assert_eq!(Expression::Number(7.0).to_string(), "7");
    assert_eq!(Expression::Number(52.0).to_string(), "52");
}

#[test]
fn test_display_fully_parenthesized() {
    let expr = Expression::Add(
        num(1.0),
        Box::new(Expression::Add(
            num(2.0),
            Box::new(Expression::Add(num(3.0), num(4.0))),
        )),
    );
    assert_eq!(expr.to_string(), "(1+(2+(3+4)))");

    let expr = Expression::Div(
        Box::new(Expression::Mul(num(12.0), num(3.0))),
        Box::new(Expression::Sub(num(5.0), num(4.0))),
    );
    assert_eq!(expr.to_string(), "((12*3)/(5-4))");
}

#[test]
fn test_evaluate_basic_operators() {
    assert_eq!(Expression::Add(num(3.0), num(4.0)).evaluate(), Ok(7.0));
    assert_eq!(Expression::Sub(num(3.0), num(4.0)).evaluate(), Ok(-1.0));
    assert_eq!(Expression::Mul(num(3.0), num(4.0)).evaluate(), Ok(12.0));
    assert_eq!(Expression::Div(num(3.0), num(4.0)).evaluate(), Ok(0.75));
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::Div(num(5.0), Box::new(Expression::Sub(num(3.0), num(3.0))));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
    assert_eq!(expr.evaluate_rounded(), None);
    assert_eq!(expr.integer_value(), None);
}

#[test]
fn test_division_by_zero_propagates_through_parents() {
    let inner = Expression::Div(num(5.0), Box::new(Expression::Sub(num(3.0), num(3.0))));
    let expr = Expression::Add(Box::new(inner), num(1.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_division_by_small_number() {
    let expr = Expression::Div(num(1.0), num(f64::EPSILON / 2.0));
    assert!(expr.evaluate().is_err());
}

#[test]
fn test_non_finite_leaf() {
    assert_eq!(
        Expression::Number(f64::INFINITY).evaluate(),
        Err(ExpressionError::NonFinite)
    );
    assert_eq!(
        Expression::Mul(num(f64::MAX), num(2.0)).evaluate(),
        Err(ExpressionError::NonFinite)
    );
}

#[test]
fn test_one_third_is_not_an_integer() {
    let expr = Expression::Div(num(1.0), num(3.0));
    assert_eq!(expr.evaluate_rounded(), Some(0.333_333));
    assert_eq!(expr.integer_value(), None);
}

#[test]
fn test_rounding_absorbs_float_error() {
    let expr = Expression::Mul(Box::new(Expression::Div(num(1.0), num(3.0))), num(3.0));
    assert_eq!(expr.integer_value(), Some(1));

    let expr = Expression::Div(
        num(8.0),
        Box::new(Expression::Sub(
            num(3.0),
            Box::new(Expression::Div(num(8.0), num(3.0))),
        )),
    );
    assert_eq!(expr.integer_value(), Some(24));
}

#[test]
fn test_parse_leaf() {
    assert_eq!("9".parse::<Expression>(), Ok(Expression::Number(9.0)));
    assert_eq!("123".parse::<Expression>(), Ok(Expression::Number(123.0)));
}

#[test]
fn test_parse_nested() {
    let parsed = "((12-3)-4)".parse::<Expression>();
    let expected = Expression::Sub(
        Box::new(Expression::Sub(num(12.0), num(3.0))),
        num(4.0),
    );
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn test_parse_renders_back_to_same_text() {
    for text in ["(1+(2+(3+4)))", "((5/5)*(5/5))", "(22/(5-2))", "(1/234)", "1234"] {
        let parsed = text.parse::<Expression>();
        assert!(parsed.is_ok(), "failed to parse {}", text);
        if let Ok(expr) = parsed {
            assert_eq!(expr.to_string(), text);
        }
    }
}

#[test]
fn test_parse_rejects_malformed_text() {
    for text in [
        "", "(", "()", "(1+2", "1+2", "(1+2))", "(1^2)", "(1 + 2)", "(-1+2)", "(1+2)3", "x",
    ] {
        assert!(
            text.parse::<Expression>().is_err(),
            "expected '{}' to be rejected",
            text
        );
    }
}

#[test]
fn test_parse_error_position() {
    let err = "(1+2".parse::<Expression>();
    assert_eq!(
        err,
        Err(ExpressionError::Parse {
            position: 4,
            message: "expected ')', found end of input".to_string(),
        })
    );
}

#[test]
fn test_evaluate_text() {
    assert_eq!(evaluate("((12-3)-4)"), Some(5.0));
    assert_eq!(evaluate("((5/5)*(5/5))"), Some(1.0));
    assert_eq!(evaluate("(1/3)"), Some(0.333_333));
    assert_eq!(evaluate("(7/(2-2))"), None);
    assert_eq!(evaluate("(7/"), None);
}

#[test]
fn test_operator_apply_and_symbols() {
    let rendered: Vec<String> = Operator::ALL
        .iter()
        .map(|op| op.apply(Expression::Number(6.0), Expression::Number(3.0)).to_string())
        .collect();
    assert_eq!(rendered, vec!["(6+3)", "(6-3)", "(6*3)", "(6/3)"]);

    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('^'), None);
}

#[test]
fn test_parse_rejects_deep_nesting() {
    let text = "(".repeat(200_000);
    let err = text.parse::<Expression>();
    assert!(matches!(
        err,
        Err(ExpressionError::Parse { position, .. }) if position == MAX_DEPTH
    ));
    assert_eq!(evaluate(&text), None);
}

#[test]
fn test_parse_accepts_nesting_up_to_limit() {
    let mut text = "1".to_string();
    for _ in 0..MAX_DEPTH {
        text = format!("({}+1)", text);
    }
    assert_eq!(evaluate(&text), Some((MAX_DEPTH + 1) as f64));

    let deeper = format!("({}+1)", text);
    assert_eq!(evaluate(&deeper), None);
}
