//! Проход по списаниям: чистое решение «списать / остановиться» без вывода.
//!
//! Проход берёт начальный баланс и упорядоченный список сумм. Каждая сумма
//! проверяется против текущего остатка: если остатка хватает, она списывается,
//! если нет, проход останавливается и оставшиеся суммы не рассматриваются.
//! Сумма, равная остатку, допустима и обнуляет его.

use crate::{
    error::{Result, WalkError},
    model::{Outcome, Plan, WalkEvent, WalkReport},
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    opening_balance: Decimal,
    withdrawals: Vec<Decimal>,
}

impl Walk {
    /// Отрицательный баланс и неположительные суммы отвергаются сразу,
    /// до первого события.
    pub fn new(opening_balance: Decimal, withdrawals: Vec<Decimal>) -> Result<Self> {
        if opening_balance < Decimal::ZERO {
            warn!(%opening_balance, "rejecting negative opening balance");
            return Err(WalkError::InvalidInput(format!(
                "opening balance must not be negative, got {opening_balance}"
            )));
        }
        if let Some((index, amount)) = withdrawals
            .iter()
            .enumerate()
            .find(|(_, w)| **w <= Decimal::ZERO)
        {
            warn!(index, %amount, "rejecting non-positive withdrawal");
            return Err(WalkError::InvalidInput(format!(
                "withdrawal #{index} must be positive, got {amount}"
            )));
        }
        Ok(Walk {
            opening_balance,
            withdrawals,
        })
    }

    /// Собирает проход из плана; `balance` из командной строки важнее
    /// баланса из файла.
    pub fn from_plan(plan: Plan, balance: Option<Decimal>) -> Result<Self> {
        let opening = balance
            .or(plan.opening_balance)
            .ok_or_else(|| WalkError::InvalidInput("missing opening balance".into()))?;
        Walk::new(opening, plan.withdrawals)
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    pub fn withdrawals(&self) -> &[Decimal] {
        &self.withdrawals
    }

    /// Ленивая трасса. Каждый вызов начинает с начального баланса заново.
    pub fn events(&self) -> Events<'_> {
        Events {
            withdrawals: self.withdrawals.iter().enumerate(),
            balance: self.opening_balance,
            finished: false,
        }
    }

    pub fn run(&self) -> WalkReport {
        let events: Vec<WalkEvent> = self.events().collect();
        let (closing_balance, outcome) = match events.last() {
            Some(WalkEvent::Halted { balance, .. }) => (*balance, Outcome::Halted),
            Some(last) => (last.balance(), Outcome::Completed),
            // Events всегда заканчивается терминальным событием
            None => (self.opening_balance, Outcome::Completed),
        };
        WalkReport {
            opening_balance: self.opening_balance,
            closing_balance,
            events,
            outcome,
        }
    }
}

/// Итератор событий прохода. Последним всегда идёт `Halted` или `Completed`.
#[derive(Debug, Clone)]
pub struct Events<'a> {
    withdrawals: std::iter::Enumerate<std::slice::Iter<'a, Decimal>>,
    balance: Decimal,
    finished: bool,
}

impl Iterator for Events<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        if self.finished {
            return None;
        }

        let Some((index, &amount)) = self.withdrawals.next() else {
            self.finished = true;
            info!(balance = %self.balance, "walk completed without shortfall");
            return Some(WalkEvent::Completed {
                balance: self.balance,
            });
        };

        if self.balance - amount < Decimal::ZERO {
            self.finished = true;
            info!(index, %amount, balance = %self.balance, "walk halted on insufficient funds");
            return Some(WalkEvent::Halted {
                index,
                amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        debug!(index, %amount, balance = %self.balance, "withdrawal applied");
        Some(WalkEvent::Applied {
            index,
            amount,
            balance: self.balance,
        })
    }
}

impl std::iter::FusedIterator for Events<'_> {}

/// Удобная обёртка: проверить вход и сразу пройти.
pub fn run(opening_balance: Decimal, withdrawals: &[Decimal]) -> Result<WalkReport> {
    Ok(Walk::new(opening_balance, withdrawals.to_vec())?.run())
}
