//! Precatório acquisition result and its comparison against fixed benchmarks.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{BenchmarkRates, CostSchedule};
use crate::costs::CostBreakdown;
use crate::error::{Result, SimulationError};
use crate::projection::{Projection, grow, project};

pub const MIN_PERIOD_YEARS: u32 = 1;
pub const MAX_PERIOD_YEARS: u32 = 10;
/// Largest accepted face value (R$ 1 quadrillion).
pub const MAX_FACE_VALUE: Decimal = dec!(1_000_000_000_000_000);
/// Largest accepted reference rate, in percent.
pub const MAX_ANNUAL_RATE_PCT: Decimal = dec!(100);

/// Validated inputs of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionInput {
    /// Nominal amount owed by the government.
    pub face_value: Decimal,
    /// Reference (Selic) rate as a fraction, e.g. 0.1475 for 14.75%.
    pub annual_rate: Decimal,
    /// Holding period in whole years.
    pub period_years: u32,
}

impl AcquisitionInput {
    /// Builds an input from a rate expressed in percent, as typed by a user.
    pub fn new(face_value: Decimal, annual_rate_pct: Decimal, period_years: u32) -> Result<Self> {
        let input = Self {
            face_value,
            annual_rate: annual_rate_pct / Decimal::ONE_HUNDRED,
            period_years,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<()> {
        if self.face_value <= Decimal::ZERO {
            return Err(SimulationError::NonPositiveFaceValue(self.face_value));
        }
        if self.face_value > MAX_FACE_VALUE {
            return Err(SimulationError::FaceValueTooLarge {
                value: self.face_value,
                max: MAX_FACE_VALUE,
            });
        }
        if self.annual_rate < Decimal::ZERO {
            return Err(SimulationError::NegativeRate(self.annual_rate_pct()));
        }
        if self.annual_rate_pct() > MAX_ANNUAL_RATE_PCT {
            return Err(SimulationError::RateTooLarge {
                value: self.annual_rate_pct(),
                max: MAX_ANNUAL_RATE_PCT,
            });
        }
        if !(MIN_PERIOD_YEARS..=MAX_PERIOD_YEARS).contains(&self.period_years) {
            return Err(SimulationError::PeriodOutOfRange {
                years: self.period_years,
                min: MIN_PERIOD_YEARS,
                max: MAX_PERIOD_YEARS,
            });
        }
        Ok(())
    }

    pub fn annual_rate_pct(&self) -> Decimal {
        self.annual_rate * Decimal::ONE_HUNDRED
    }
}

/// Costs and projected outcome of acquiring a precatório.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionResult {
    /// The inputs this result was computed from.
    pub input: AcquisitionInput,
    /// Cost lines in presentation order.
    pub cost_breakdown: CostBreakdown,
    /// Sum of the cost lines; the amount invested.
    pub total_cost: Decimal,
    /// Face value updated by the reference rate over the period.
    pub future_value: Decimal,
    /// `future_value - total_cost`.
    pub gross_profit: Decimal,
    /// Gross profit over the total cost, in percent.
    pub period_return_pct: Decimal,
    /// Constant yearly rate equivalent to the period return, in percent.
    pub annualized_return_pct: Decimal,
}

impl AcquisitionResult {
    fn projection(&self) -> Projection {
        Projection {
            principal: self.total_cost,
            future_value: self.future_value,
            profit: self.gross_profit,
            period_return_pct: self.period_return_pct,
            annualized_return_pct: self.annualized_return_pct,
        }
    }
}

/// Prices the acquisition of the precatório described by `input`.
///
/// The receivable grows from its face value while the returns are measured
/// against the total acquisition cost.
pub fn evaluate_acquisition(input: &AcquisitionInput, schedule: &CostSchedule) -> AcquisitionResult {
    let (cost_breakdown, total_cost) = schedule.compute(input.face_value);
    let future_value = grow(input.face_value, input.annual_rate, input.period_years);
    let projection = Projection::from_values(total_cost, future_value, input.period_years);

    log::debug!(
        "precatório {}: cost {total_cost}, value after {}y {future_value}, {}% a.a.",
        input.face_value,
        input.period_years,
        projection.annualized_return_pct
    );

    AcquisitionResult {
        input: input.clone(),
        cost_breakdown,
        total_cost,
        future_value,
        gross_profit: projection.profit,
        period_return_pct: projection.period_return_pct,
        annualized_return_pct: projection.annualized_return_pct,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Benchmark {
    /// The precatório itself, bought at its acquisition cost.
    Precatorio,
    /// Savings account (poupança), fixed yield.
    Savings,
    /// Bank CD paying a share of the CDI.
    Cdb,
    /// Treasury bond indexed to the Selic rate.
    TesouroSelic,
}

impl Benchmark {
    pub const ALL: [Benchmark; 4] = [
        Benchmark::Precatorio,
        Benchmark::Savings,
        Benchmark::Cdb,
        Benchmark::TesouroSelic,
    ];

    pub fn label(self, rates: &BenchmarkRates) -> String {
        match self {
            Benchmark::Precatorio => "Precatório".to_string(),
            Benchmark::Savings => "Poupança".to_string(),
            Benchmark::Cdb => format!(
                "CDB ({}% CDI)",
                (rates.cdb_cdi_share * Decimal::ONE_HUNDRED).normalize()
            ),
            Benchmark::TesouroSelic => "Tesouro Selic".to_string(),
        }
    }

    /// Nominal annual rate of the vehicle, as a fraction. `None` for the
    /// precatório, whose yield comes from its discount rather than a rate.
    pub fn annual_rate(self, reference_rate: Decimal, rates: &BenchmarkRates) -> Option<Decimal> {
        match self {
            Benchmark::Precatorio => None,
            Benchmark::Savings => Some(rates.savings_annual_rate),
            Benchmark::Cdb => Some(reference_rate * rates.cdb_cdi_share),
            Benchmark::TesouroSelic => Some(reference_rate),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Investment vehicle of this row.
    pub benchmark: Benchmark,
    /// Display name, e.g. `CDB (90% CDI)`.
    pub label: String,
    /// Amount invested, the total acquisition cost.
    pub principal: Decimal,
    /// Nominal annual rate for benchmarks, annualized return for the precatório.
    pub annual_rate_pct: Decimal,
    /// Value at the end of the period.
    pub future_value: Decimal,
    /// `future_value - principal`.
    pub profit: Decimal,
    /// Profit over the principal, in percent.
    pub period_return_pct: Decimal,
}

impl BenchmarkResult {
    fn new(benchmark: Benchmark, label: String, annual_rate_pct: Decimal, projection: Projection) -> Self {
        Self {
            benchmark,
            label,
            principal: projection.principal,
            annual_rate_pct,
            future_value: projection.future_value,
            profit: projection.profit,
            period_return_pct: projection.period_return_pct,
        }
    }
}

/// Precatório first, then the benchmarks, all with the same principal and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Holding period shared by every row.
    pub period_years: u32,
    /// Precatório row followed by savings, CDB and Tesouro Selic.
    pub rows: Vec<BenchmarkResult>,
}

impl ComparisonTable {
    pub fn get(&self, benchmark: Benchmark) -> Option<&BenchmarkResult> {
        self.rows.iter().find(|row| row.benchmark == benchmark)
    }
}

/// Invests the acquisition cost of `result` in each benchmark for the same period.
pub fn build_comparison(result: &AcquisitionResult, rates: &BenchmarkRates) -> ComparisonTable {
    let principal = result.total_cost;
    let years = result.input.period_years;

    let rows = Benchmark::ALL
        .iter()
        .map(|&benchmark| {
            let label = benchmark.label(rates);
            match benchmark.annual_rate(result.input.annual_rate, rates) {
                Some(rate) => BenchmarkResult::new(
                    benchmark,
                    label,
                    rate * Decimal::ONE_HUNDRED,
                    project(principal, rate, years),
                ),
                None => BenchmarkResult::new(
                    benchmark,
                    label,
                    result.annualized_return_pct,
                    result.projection(),
                ),
            }
        })
        .collect();

    ComparisonTable { period_years: years, rows }
}
