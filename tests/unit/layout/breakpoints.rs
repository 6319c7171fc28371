use super::*;

fn cols(n: i64) -> ColumnCount {
    ColumnCount::clamped(n)
}

#[test]
fn default_steps_follow_common_widths() {
    let bp = Breakpoints::default();
    bp.validate().unwrap();
    assert_eq!(bp.columns_for_width(0.0), cols(1));
    assert_eq!(bp.columns_for_width(639.9), cols(1));
    assert_eq!(bp.columns_for_width(640.0), cols(2));
    assert_eq!(bp.columns_for_width(1023.0), cols(2));
    assert_eq!(bp.columns_for_width(1024.0), cols(3));
    assert_eq!(bp.columns_for_width(4000.0), cols(4));
}

#[test]
fn unmeasured_widths_use_fallback() {
    let bp = Breakpoints {
        fallback: cols(2),
        ..Breakpoints::default()
    };
    assert_eq!(bp.columns_for_width(f64::NAN), cols(2));
    assert_eq!(bp.columns_for_width(-1.0), cols(2));
    assert_eq!(bp.columns_for_width(f64::INFINITY), cols(2));
}

#[test]
fn fixed_ignores_width() {
    let bp = Breakpoints::fixed(cols(3));
    assert_eq!(bp.columns_for_width(10.0), cols(3));
    assert_eq!(bp.columns_for_width(10_000.0), cols(3));
}

#[test]
fn unordered_steps_are_invalid() {
    let bp = Breakpoints {
        fallback: cols(1),
        steps: vec![
            Breakpoint {
                min_width_px: 800.0,
                columns: cols(2),
            },
            Breakpoint {
                min_width_px: 800.0,
                columns: cols(3),
            },
        ],
    };
    assert!(bp.validate().is_err());
}

#[test]
fn parses_camel_case_json() {
    let bp: Breakpoints = serde_json::from_str(
        r#"{ "fallback": 0, "steps": [ { "minWidthPx": 500, "columns": 2 } ] }"#,
    )
    .unwrap();
    bp.validate().unwrap();
    assert_eq!(bp.fallback, cols(1));
    assert_eq!(bp.columns_for_width(700.0), cols(2));
}
