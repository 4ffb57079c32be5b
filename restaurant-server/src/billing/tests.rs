use super::money::*;
use super::summary::{BillingError, SummaryLine, assemble_summary};

fn line(name: &str, quantity: f64, unit_price: f64) -> SummaryLine {
    SummaryLine {
        image: format!("{name}.png"),
        name: name.to_string(),
        quantity,
        unit_price,
        total_price: line_total(unit_price, quantity),
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_line_total_simple() {
    assert_eq!(line_total(5.00, 2.0), 10.00);
    assert_eq!(line_total(3.50, 1.0), 3.50);
    assert_eq!(line_total(10.99, 3.0), 32.97);
}

#[test]
fn test_line_total_half_up_boundary() {
    // .005 boundary rounds away from zero
    assert_eq!(line_total(9.995, 3.0), 29.99);
    assert_eq!(line_total(0.005, 1.0), 0.01);
    // Just below the boundary rounds down
    assert_eq!(line_total(1.0049, 1.0), 1.00);
}

#[test]
fn test_line_total_deterministic() {
    let first = line_total(7.77, 3.33);
    for _ in 0..100 {
        assert_eq!(line_total(7.77, 3.33), first);
    }
}

#[test]
fn test_round_to_cents() {
    assert_eq!(round_to_cents(10.005), 10.01);
    assert_eq!(round_to_cents(2.004), 2.00);
    assert_eq!(round_to_cents(5.0), 5.00);
}

#[test]
fn test_sum_totals_accumulation() {
    // Sum 0.10 one thousand times without f64 drift
    let totals = std::iter::repeat_n(0.10, 1000);
    assert_eq!(sum_totals(totals), 100.0);
}

#[test]
fn test_assemble_summary_counts_and_payment_due() {
    // Food A: 5.00 x 2 -> 10.00; Food B: 3.50 x 1 -> 3.50; table 4
    let summary = assemble_summary(4, vec![line("A", 2.0, 5.00), line("B", 1.0, 3.50)])
        .expect("summary should assemble");

    assert_eq!(summary.table_number, 4);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.payment_due, 13.50);
    assert_eq!(summary.order_items[0].total_price, 10.00);
    assert_eq!(summary.order_items[1].total_price, 3.50);
}

#[test]
fn test_assemble_summary_line_count_matches() {
    let lines: Vec<SummaryLine> = (1..=7).map(|i| line("dish", i as f64, 1.25)).collect();
    let expected: f64 = sum_totals(lines.iter().map(|l| l.total_price));

    let summary = assemble_summary(2, lines).expect("summary should assemble");
    assert_eq!(summary.total_count, 7);
    assert_eq!(summary.payment_due, expected);
}

#[test]
fn test_assemble_summary_empty_is_ambiguous() {
    let err = assemble_summary(1, vec![]).expect_err("empty order must not summarize");
    assert!(matches!(err, BillingError::Ambiguous(_)));
}
