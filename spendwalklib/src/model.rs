//! Доменные модели: план прохода, события и итоговый отчёт.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Входные данные прохода в том виде, в каком их отдают форматы.
/// Начальный баланс может прийти позже, из командной строки.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(default)]
    pub opening_balance: Option<Decimal>,
    #[serde(default)]
    pub withdrawals: Vec<Decimal>,
}

/// Один шаг трассы. `index` — позиция списания в исходной последовательности.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WalkEvent {
    /// Списание прошло, `balance` — остаток после него.
    Applied {
        index: usize,
        amount: Decimal,
        balance: Decimal,
    },
    /// Денег не хватило, `balance` — остаток до попытки (не изменился).
    Halted {
        index: usize,
        amount: Decimal,
        balance: Decimal,
    },
    /// Последовательность исчерпана без остановки.
    Completed { balance: Decimal },
}

impl WalkEvent {
    /// Остаток, который несёт событие.
    pub fn balance(&self) -> Decimal {
        match *self {
            WalkEvent::Applied { balance, .. }
            | WalkEvent::Halted { balance, .. }
            | WalkEvent::Completed { balance } => balance,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WalkEvent::Halted { .. } | WalkEvent::Completed { .. })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    Halted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkReport {
    pub opening_balance: Decimal,
    pub closing_balance: Decimal,
    pub events: Vec<WalkEvent>,
    pub outcome: Outcome,
}

impl WalkReport {
    /// Сколько списаний было попробовано (включая то, на котором остановились).
    pub fn attempted(&self) -> usize {
        self.events
            .iter()
            .filter(|e| !matches!(e, WalkEvent::Completed { .. }))
            .count()
    }

    pub fn applied(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, WalkEvent::Applied { .. }))
            .count()
    }

    /// Позиция списания, на котором проход остановился.
    pub fn halted_at(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match e {
            WalkEvent::Halted { index, .. } => Some(*index),
            _ => None,
        })
    }
}
