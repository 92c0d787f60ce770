use rust_decimal::Decimal;
use spendwalklib::{
    error::WalkError,
    formats::csv::Csv,
    traits::{ReadPlan, WriteReport},
    walk::Walk,
};
use std::io::Cursor;

#[test]
fn csv_plan_read() {
    let input = "amount\n10\n 23.50 \n12\n";
    let plan = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(plan.opening_balance, None);
    assert_eq!(
        plan.withdrawals,
        vec![Decimal::new(10, 0), Decimal::new(2350, 2), Decimal::new(12, 0)]
    );
}

#[test]
fn csv_plan_rejects_garbage() {
    let err = Csv::read(Cursor::new("amount\nten\n")).unwrap_err();
    assert!(matches!(err, WalkError::Parse(_)), "got {err:?}");
}

#[test]
fn csv_report_rows() {
    let withdrawals = vec![10, 20, 30].into_iter().map(Decimal::from).collect();
    let walk = Walk::new(Decimal::new(50, 0), withdrawals).expect("valid walk");
    let mut out = Vec::new();
    Csv::write(&mut out, &walk.run()).expect("write csv");

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "index,amount,outcome,balance",
            "0,10,applied,40",
            "1,20,applied,20",
            "2,30,halted,20",
        ]
    );
}
