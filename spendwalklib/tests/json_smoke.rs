use rust_decimal::Decimal;
use spendwalklib::{
    formats::json::Json,
    model::{Outcome, WalkReport},
    traits::{ReadPlan, WriteReport},
    walk::Walk,
};
use std::io::Cursor;

#[test]
fn json_plan_read() {
    let input = r#"{"opening_balance": "200", "withdrawals": [10, "23", 12.5]}"#;
    let plan = Json::read(Cursor::new(input)).expect("read json");
    assert_eq!(plan.opening_balance, Some(Decimal::new(200, 0)));
    assert_eq!(plan.withdrawals.len(), 3);
    assert_eq!(plan.withdrawals[2], Decimal::new(125, 1));
}

#[test]
fn json_plan_balance_is_optional() {
    let plan = Json::read(Cursor::new(r#"{"withdrawals": []}"#)).expect("read json");
    assert_eq!(plan.opening_balance, None);
    assert!(plan.withdrawals.is_empty());
}

#[test]
fn json_report_read_back() {
    let walk = Walk::new(Decimal::new(0, 0), vec![Decimal::ONE]).expect("valid walk");
    let report = walk.run();

    let mut out = Vec::new();
    Json::write(&mut out, &report).expect("write json");

    let back: WalkReport = serde_json::from_slice(&out).expect("parse report");
    assert_eq!(back.outcome, Outcome::Halted);
    assert_eq!(back, report);
}
