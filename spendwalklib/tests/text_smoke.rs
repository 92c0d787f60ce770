use rust_decimal::Decimal;
use spendwalklib::{formats::text::Text, traits::WriteReport, walk::run};

fn render(balance: i64, ws: &[i64]) -> String {
    let ws: Vec<Decimal> = ws.iter().copied().map(Decimal::from).collect();
    let report = run(Decimal::from(balance), &ws).expect("valid walk");
    let mut out = Vec::new();
    Text::write(&mut out, &report).expect("write text");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn text_completed_spree() {
    let text = render(200, &[10, 23, 12, 16, 43, 19, 4, 5]);
    assert!(text.contains("$68 left"));
    assert!(text.contains("without going broke"));
    assert!(!text.contains("spree ends here"));
}

#[test]
fn text_halted_spree() {
    let text = render(50, &[10, 20, 30, 5]);
    assert!(text.contains("spree ends here"));
    assert!(!text.contains("without going broke"));
    assert!(!text.contains("something for $5..."));
}
