//! JSON: план `{"opening_balance": "200", "withdrawals": [10, "23.5"]}`,
//! отчёт — сериализованный `WalkReport` целиком.

use crate::{
    error::Result,
    model::{Plan, WalkReport},
};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadPlan for Json {
    fn read<R: BufRead>(r: R) -> Result<Plan> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl crate::traits::WriteReport for Json {
    fn write<W: Write>(mut w: W, report: &WalkReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, report)?;
        writeln!(w)?;
        Ok(())
    }
}
