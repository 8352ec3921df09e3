//! `br_precatorio` is a Rust library for estimating the profitability of buying a
//! precatório, a court-ordered payment owed by the Brazilian government.
//!
//! Given the face value of the precatório, the annual Selic rate and a holding
//! period, it computes:
//! - **Acquisition costs**: the price paid to the creditor plus intermediation,
//!   legal follow-up, deed and habilitation fees.
//! - **Projected value**: the face value updated by the Selic rate with annual
//!   compounding, and the resulting profit and returns over the acquisition cost.
//! - **Comparison**: what the same amount would yield in a savings account
//!   (poupança), a CDB paying a share of the CDI and Tesouro Selic.
//!
//! ## Usage
//!
//! ```rust
//! use br_precatorio::{simulate, AcquisitionInput, Benchmark, SimulatorConfig};
//! use rust_decimal_macros::dec;
//!
//! fn main() -> Result<(), br_precatorio::SimulationError> {
//!     let input = AcquisitionInput::new(dec!(100_000), dec!(14.75), 5)?;
//!     let simulation = simulate(&input, &SimulatorConfig::default())?;
//!
//!     assert_eq!(simulation.acquisition.total_cost, dec!(64000));
//!     println!("Annual return: {:.2}%", simulation.acquisition.annualized_return_pct);
//!
//!     let cdb = simulation.comparison.get(Benchmark::Cdb).unwrap();
//!     println!("{}: {:.2}", cdb.label, cdb.future_value);
//!     Ok(())
//! }
//! ```

pub mod comparison;
pub mod config;
pub mod costs;
pub mod error;
pub mod format;
pub mod projection;

use serde::{Deserialize, Serialize};

pub use comparison::{
    AcquisitionInput, AcquisitionResult, Benchmark, BenchmarkResult, ComparisonTable,
    build_comparison, evaluate_acquisition,
};
pub use config::{BenchmarkRates, CostSchedule, SimulatorConfig};
pub use costs::{CostBreakdown, CostEntry, CostKind, compute_costs};
pub use error::{Result, SimulationError};
pub use projection::{Projection, project};

/// Full outcome of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Costs and projected outcome of the precatório.
    pub acquisition: AcquisitionResult,
    /// The precatório side by side with the benchmarks.
    pub comparison: ComparisonTable,
}

/// Prices the acquisition described by `input` and compares it with the benchmarks.
///
/// This is the main entry point of the library. Every call builds its results
/// from scratch; nothing is shared between simulations.
///
/// # Errors
///
/// Returns an error if `input` or `config` is outside the accepted ranges.
pub fn simulate(input: &AcquisitionInput, config: &SimulatorConfig) -> Result<Simulation> {
    input.validate()?;
    config.validate()?;

    let acquisition = evaluate_acquisition(input, &config.costs);
    let comparison = build_comparison(&acquisition, &config.benchmarks);

    Ok(Simulation {
        acquisition,
        comparison,
    })
}
