//! Простой CSV.
//! План: заголовок `amount`, по одному списанию на строку, баланса нет.
//! Отчёт: `index,amount,outcome,balance`, по строке на каждую попытку.

use crate::{
    error::{Result, WalkError},
    model::{Plan, WalkEvent, WalkReport},
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    amount: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow {
    index: usize,
    amount: String,
    outcome: &'static str,
    balance: String,
}

pub struct Csv;

impl crate::traits::ReadPlan for Csv {
    fn read<R: BufRead>(r: R) -> Result<Plan> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(r);
        let mut withdrawals = Vec::new();

        for (line, rec) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = rec?;
            if row.amount.is_empty() {
                return Err(WalkError::Parse(format!("row {}: empty amount", line + 1)));
            }
            let amount = row
                .amount
                .parse::<Decimal>()
                .map_err(|e| WalkError::Parse(format!("row {}: amount: {e}", line + 1)))?;
            withdrawals.push(amount);
        }

        Ok(Plan {
            opening_balance: None,
            withdrawals,
        })
    }
}

impl crate::traits::WriteReport for Csv {
    fn write<W: Write>(mut w: W, report: &WalkReport) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for ev in &report.events {
            let out = match *ev {
                WalkEvent::Applied { index, amount, balance } => CsvOutRow {
                    index,
                    amount: amount.to_string(),
                    outcome: "applied",
                    balance: balance.to_string(),
                },
                WalkEvent::Halted { index, amount, balance } => CsvOutRow {
                    index,
                    amount: amount.to_string(),
                    outcome: "halted",
                    balance: balance.to_string(),
                },
                WalkEvent::Completed { .. } => continue,
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
