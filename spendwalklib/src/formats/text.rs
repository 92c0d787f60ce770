//! Человекочитаемая трасса «похода по магазинам». Формулировки — не контракт,
//! важны только точки решения.

use crate::{
    error::Result,
    model::{WalkEvent, WalkReport},
};
use std::io::Write;

pub struct Text;

impl crate::traits::WriteReport for Text {
    fn write<W: Write>(mut w: W, report: &WalkReport) -> Result<()> {
        writeln!(
            w,
            "💸 Time for a little shopping adventure! Starting with ${}.",
            report.opening_balance
        )?;

        for ev in &report.events {
            match ev {
                WalkEvent::Applied { amount, balance, .. } => {
                    writeln!(w, "🛒 You spot something for ${amount}...")?;
                    writeln!(
                        w,
                        "🎉 Purchase successful! You've got ${balance} left in your treasure chest."
                    )?;
                }
                WalkEvent::Halted { amount, balance, .. } => {
                    writeln!(w, "🛒 You spot something for ${amount}...")?;
                    writeln!(w, "😱 Your wallet gasps in horror, only ${balance} left!")?;
                    writeln!(w, "💀 The spree ends here, friend.")?;
                }
                WalkEvent::Completed { .. } => {
                    writeln!(w, "🎊 You made it through your spree without going broke!")?;
                }
            }
        }
        Ok(())
    }
}
