use spendwalklib::{
    formats::{csv::Csv, text::Text},
    traits::{ReadPlan, WriteReport},
    Walk,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: суммы из CSV на stdin, баланс 200, трасса текстом в stdout
    let plan = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let walk = Walk::from_plan(plan, Some(Decimal::from(200)))?;
    Text::write(std::io::stdout(), &walk.run())?;
    Ok(())
}
