//! Acquisition cost model.
//!
//! Buying a precatório costs a fixed share of its face value plus a set of
//! fees. Four of them are percentages of the face value (the deed one has a
//! floor) and one is a flat amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CostSchedule;
use crate::format::format_brl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    Acquisition,
    Intermediation,
    Habilitation,
    Monitoring,
    Deed,
}

impl CostKind {
    /// Presentation order of the breakdown.
    pub const ALL: [CostKind; 5] = [
        CostKind::Acquisition,
        CostKind::Intermediation,
        CostKind::Habilitation,
        CostKind::Monitoring,
        CostKind::Deed,
    ];

    /// Human readable label, with the rates taken from `schedule`.
    pub fn label(self, schedule: &CostSchedule) -> String {
        match self {
            CostKind::Acquisition => {
                format!("Custo de Aquisição ({}%)", as_percent(schedule.acquisition_rate))
            }
            CostKind::Intermediation => {
                format!("Custo de Intermediação ({}%)", as_percent(schedule.intermediation_rate))
            }
            CostKind::Habilitation => "Custo de Habilitação dos Compradores".to_string(),
            CostKind::Monitoring => format!(
                "Custo de Acompanhamento Processual ({}%)",
                as_percent(schedule.monitoring_rate)
            ),
            CostKind::Deed => format!(
                "Custo de Escritura de Cessão ({}%, mín. {})",
                as_percent(schedule.deed_rate),
                format_brl(schedule.deed_minimum)
            ),
        }
    }
}

fn as_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// A single line of the cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub kind: CostKind,
    pub label: String,
    pub amount: Decimal,
}

/// Ordered cost lines; iteration order is presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub entries: Vec<CostEntry>,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn get(&self, kind: CostKind) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CostEntry> {
        self.entries.iter()
    }
}

impl CostSchedule {
    /// Amount charged for `kind` on a precatório of `face_value`.
    pub fn amount(&self, kind: CostKind, face_value: Decimal) -> Decimal {
        match kind {
            CostKind::Acquisition => face_value * self.acquisition_rate,
            CostKind::Intermediation => face_value * self.intermediation_rate,
            CostKind::Habilitation => self.habilitation_fee,
            CostKind::Monitoring => face_value * self.monitoring_rate,
            CostKind::Deed => (face_value * self.deed_rate).max(self.deed_minimum),
        }
    }

    /// Computes the breakdown and its total for `face_value`.
    pub fn compute(&self, face_value: Decimal) -> (CostBreakdown, Decimal) {
        let entries = CostKind::ALL
            .iter()
            .map(|&kind| CostEntry {
                kind,
                label: kind.label(self),
                amount: self.amount(kind, face_value),
            })
            .collect();

        let breakdown = CostBreakdown { entries };
        let total = breakdown.total();
        log::debug!("acquisition costs for face value {face_value}: total {total}");

        (breakdown, total)
    }
}

/// Computes the cost breakdown with the default rate table.
pub fn compute_costs(face_value: Decimal) -> (CostBreakdown, Decimal) {
    CostSchedule::default().compute(face_value)
}
