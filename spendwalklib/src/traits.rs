//! Трэйты чтения плана и записи отчёта на основе std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{Plan, WalkReport},
};
use std::io::{BufRead, Write};

pub trait ReadPlan {
    fn read<R: BufRead>(r: R) -> Result<Plan>;
}

pub trait WriteReport {
    fn write<W: Write>(w: W, report: &WalkReport) -> Result<()>;
}
