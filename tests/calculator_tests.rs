use calculator_api::features::calculator::{
    CalcError, CalculationRequestDto, CalculatorService, ModuloPolicy, evaluate, execute,
};

fn eval(expression: &str) -> Result<(f64, &'static str), CalcError> {
    evaluate(expression, ModuloPolicy::Reject).map(|calc| (calc.value, calc.description))
}

#[test]
fn executor_matches_arithmetic_for_every_operator() {
    let cases = [
        ("+", 6.0, 3.0, 9.0, "Addition completed"),
        ("add", 6.0, 3.0, 9.0, "Addition completed"),
        ("-", 6.0, 3.0, 3.0, "Subtraction completed"),
        ("subtract", 6.0, 3.0, 3.0, "Subtraction completed"),
        ("*", 6.0, 3.0, 18.0, "Multiplication completed"),
        ("multiply", 6.0, 3.0, 18.0, "Multiplication completed"),
        ("/", 6.0, 3.0, 2.0, "Division completed"),
        ("divide", 6.0, 3.0, 2.0, "Division completed"),
        ("%", 7.0, 3.0, 1.0, "Modulo completed"),
        ("mod", 7.0, 3.0, 1.0, "Modulo completed"),
        ("^", 2.0, 10.0, 1024.0, "Power calculation completed"),
        ("power", 2.0, 10.0, 1024.0, "Power calculation completed"),
    ];

    for (op, left, right, expected, description) in cases {
        let calc = execute(left, right, op, ModuloPolicy::Reject)
            .unwrap_or_else(|err| panic!("{op} failed: {err}"));
        assert_eq!(calc.value, expected, "operator {op}");
        assert_eq!(calc.description, description, "operator {op}");
    }
}

#[test]
fn modulo_sign_follows_the_dividend() {
    let calc = execute(-7.0, 3.0, "%", ModuloPolicy::Reject).unwrap();
    assert_eq!(calc.value, -1.0);
    let calc = execute(7.0, -3.0, "%", ModuloPolicy::Reject).unwrap();
    assert_eq!(calc.value, 1.0);
    let calc = execute(5.5, 2.0, "%", ModuloPolicy::Reject).unwrap();
    assert_eq!(calc.value, 1.5);
}

#[test]
fn power_handles_fractional_and_negative_exponents() {
    let root = execute(9.0, 0.5, "^", ModuloPolicy::Reject).unwrap().value;
    assert!((root - 3.0).abs() < 1e-12);
    assert_eq!(execute(2.0, -2.0, "^", ModuloPolicy::Reject).unwrap().value, 0.25);
    assert!(execute(-8.0, 0.5, "^", ModuloPolicy::Reject).unwrap().value.is_nan());
}

#[test]
fn division_by_zero_is_rejected() {
    for left in [0.0, 1.0, -3.5, f64::MAX] {
        assert_eq!(
            execute(left, 0.0, "/", ModuloPolicy::Reject),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            execute(left, -0.0, "divide", ModuloPolicy::Nan),
            Err(CalcError::DivideByZero)
        );
    }
}

#[test]
fn modulo_by_zero_depends_on_policy() {
    assert_eq!(
        execute(5.0, 0.0, "%", ModuloPolicy::Reject),
        Err(CalcError::ModuloByZero)
    );
    let calc = execute(5.0, 0.0, "mod", ModuloPolicy::Nan).expect("nan policy succeeds");
    assert!(calc.value.is_nan());
    assert_eq!(calc.description, "Modulo completed");
}

#[test]
fn unknown_operation_is_unsupported() {
    assert_eq!(
        execute(1.0, 2.0, "sqrt", ModuloPolicy::Reject),
        Err(CalcError::UnsupportedOperation("sqrt".to_string()))
    );
    assert_eq!(
        execute(1.0, 2.0, "", ModuloPolicy::Reject)
            .unwrap_err()
            .to_string(),
        "unsupported operation: "
    );
}

#[test]
fn evaluator_handles_simple_expressions() {
    assert_eq!(eval("5+3"), Ok((8.0, "Addition completed")));
    assert_eq!(eval("  12 / 4  "), Ok((3.0, "Division completed")));
    assert_eq!(eval("2^3"), Ok((8.0, "Power calculation completed")));
    assert_eq!(eval("10 % 4"), Ok((2.0, "Modulo completed")));
    assert_eq!(eval("1.5*4"), Ok((6.0, "Multiplication completed")));
}

#[test]
fn leading_sign_is_not_an_operator() {
    assert_eq!(eval("-5+3"), Ok((-2.0, "Addition completed")));
    assert_eq!(eval("-5-3"), Ok((-8.0, "Subtraction completed")));
    assert_eq!(eval("-5"), Ok((-5.0, "Value parsed")));
}

#[test]
fn glyphs_are_normalized_before_scanning() {
    assert_eq!(eval("10÷2"), Ok((5.0, "Division completed")));
    assert_eq!(eval("3 × 4"), Ok((12.0, "Multiplication completed")));
}

#[test]
fn single_number_is_parsed_as_value() {
    assert_eq!(eval("42"), Ok((42.0, "Value parsed")));
    assert_eq!(eval(" 3.25 "), Ok((3.25, "Value parsed")));
}

#[test]
fn unparsable_input_is_invalid_format() {
    for input in ["abc", "5+", "", "   ", "+", "5 + x", "1+2+3"] {
        assert_eq!(eval(input), Err(CalcError::InvalidFormat), "input {input:?}");
    }
}

#[test]
fn out_of_range_operands_are_invalid_format() {
    assert_eq!(eval("1e400"), Err(CalcError::InvalidFormat));
    assert_eq!(eval("1e400+1"), Err(CalcError::InvalidFormat));
    assert_eq!(eval("1-1e400"), Err(CalcError::InvalidFormat));
    assert_eq!(eval("1e308"), Ok((1e308, "Value parsed")));
}

#[test]
fn non_finite_literals_still_parse() {
    assert_eq!(eval("inf"), Ok((f64::INFINITY, "Value parsed")));
    assert_eq!(eval("1+Infinity"), Ok((f64::INFINITY, "Addition completed")));
}

#[test]
fn scan_order_decides_multi_operator_input() {
    // `+` is tried first; its rightmost split "5*2" | "3" does not parse, then
    // `*` splits "5" | "2+3" which also fails, so nothing evaluates.
    assert_eq!(eval("5*2+3"), Err(CalcError::InvalidFormat));
    // A negative right operand survives because `-` fails to split before `*` is tried.
    assert_eq!(eval("5*-3"), Ok((-15.0, "Multiplication completed")));
    // `-` is tried before `^` but "2^" does not parse, so the exponent keeps its sign.
    assert_eq!(eval("2^-1"), Ok((0.5, "Power calculation completed")));
}

#[test]
fn first_successful_split_stops_the_scan() {
    assert_eq!(eval("5/0"), Err(CalcError::DivideByZero));
    assert_eq!(eval("5%0"), Err(CalcError::ModuloByZero));
}

#[test]
fn evaluation_is_repeatable() {
    let service = CalculatorService::default();
    let first = service.evaluate("7 * 6").unwrap();
    for _ in 0..10 {
        assert_eq!(service.evaluate("7 * 6").unwrap(), first);
    }
}

#[test]
fn service_prefers_expression_over_triple() {
    let service = CalculatorService::default();
    let response = service
        .calculate(CalculationRequestDto {
            expression: Some("5+3".to_string()),
            num1: Some(100.0),
            num2: Some(1.0),
            operation: Some("-".to_string()),
        })
        .unwrap();

    assert_eq!(response.result, 8.0);
    assert_eq!(response.expression, "5+3");
    assert!(response.success);
}

#[test]
fn service_formats_triple_expression() {
    let service = CalculatorService::default();
    let response = service
        .calculate(CalculationRequestDto {
            expression: Some(String::new()),
            num1: Some(6.0),
            num2: Some(3.0),
            operation: Some("divide".to_string()),
        })
        .unwrap();

    assert_eq!(response.result, 2.0);
    assert_eq!(response.expression, "6.00 divide 3.00");
    assert_eq!(response.description, "Division completed");
}

#[test]
fn service_defaults_missing_triple_fields() {
    let service = CalculatorService::default();
    let err = service
        .calculate(CalculationRequestDto::default())
        .unwrap_err();
    assert_eq!(err, CalcError::UnsupportedOperation(String::new()));

    let response = service
        .calculate(CalculationRequestDto {
            num1: Some(4.0),
            operation: Some("+".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(response.result, 4.0);
    assert_eq!(response.expression, "4.00 + 0.00");
}
