//! Rate table and benchmark parameters.
//!
//! The defaults reproduce the fixed rate table of the simulator. A JSON file
//! can override any subset of the fields, for example:
//!
//! ```json
//! { "costs": { "habilitation_fee": "4000.00" }, "benchmarks": { "cdb_cdi_share": "1.00" } }
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::comparison::MAX_FACE_VALUE;
use crate::error::{Result, SimulationError};

pub const ACQUISITION_RATE: Decimal = dec!(0.50);
pub const INTERMEDIATION_RATE: Decimal = dec!(0.05);
pub const MONITORING_RATE: Decimal = dec!(0.03);
pub const DEED_RATE: Decimal = dec!(0.01);
pub const MIN_DEED_COST: Decimal = dec!(2500.00);
pub const HABILITATION_FEE: Decimal = dec!(3500.00);

/// Annual yield of the savings account (poupança), as a fraction.
pub const SAVINGS_ANNUAL_RATE: Decimal = dec!(0.0617);
/// Share of the reference rate paid by the CDB benchmark.
pub const CDB_CDI_SHARE: Decimal = dec!(0.90);
/// Highest CDB share of the CDI a configuration may set.
pub const MAX_CDB_CDI_SHARE: Decimal = dec!(2);

/// Percentages and flat fees that make up the acquisition cost of a precatório.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSchedule {
    /// Price paid to the creditor, as a fraction of the face value.
    pub acquisition_rate: Decimal,
    /// Broker fee, as a fraction of the face value.
    pub intermediation_rate: Decimal,
    /// Legal follow-up of the lawsuit, as a fraction of the face value.
    pub monitoring_rate: Decimal,
    /// Assignment deed, as a fraction of the face value.
    pub deed_rate: Decimal,
    /// Floor applied to the deed cost.
    pub deed_minimum: Decimal,
    /// Flat fee for registering the buyers in the lawsuit.
    pub habilitation_fee: Decimal,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            acquisition_rate: ACQUISITION_RATE,
            intermediation_rate: INTERMEDIATION_RATE,
            monitoring_rate: MONITORING_RATE,
            deed_rate: DEED_RATE,
            deed_minimum: MIN_DEED_COST,
            habilitation_fee: HABILITATION_FEE,
        }
    }
}

/// Parameters of the three fixed benchmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkRates {
    /// Yield of the savings account, as a fraction.
    pub savings_annual_rate: Decimal,
    /// Share of the reference rate paid by the CDB, 0.90 for 90% of the CDI.
    pub cdb_cdi_share: Decimal,
}

impl Default for BenchmarkRates {
    fn default() -> Self {
        Self {
            savings_annual_rate: SAVINGS_ANNUAL_RATE,
            cdb_cdi_share: CDB_CDI_SHARE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Rate table of the acquisition costs.
    pub costs: CostSchedule,
    /// Parameters of the comparison benchmarks.
    pub benchmarks: BenchmarkRates,
}

fn check_range(field: &'static str, value: Decimal, max: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > max {
        return Err(SimulationError::InvalidConfig {
            field,
            value,
            min: Decimal::ZERO,
            max,
        });
    }
    Ok(())
}

impl SimulatorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects rates outside `[0, 1]`, fees outside `[0, MAX_FACE_VALUE]` and a
    /// CDB share outside `[0, MAX_CDB_CDI_SHARE]`, so every cost line stays
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        let costs = &self.costs;
        check_range("costs.acquisition_rate", costs.acquisition_rate, Decimal::ONE)?;
        check_range("costs.intermediation_rate", costs.intermediation_rate, Decimal::ONE)?;
        check_range("costs.monitoring_rate", costs.monitoring_rate, Decimal::ONE)?;
        check_range("costs.deed_rate", costs.deed_rate, Decimal::ONE)?;
        check_range("costs.deed_minimum", costs.deed_minimum, MAX_FACE_VALUE)?;
        check_range("costs.habilitation_fee", costs.habilitation_fee, MAX_FACE_VALUE)?;

        let benchmarks = &self.benchmarks;
        check_range("benchmarks.savings_annual_rate", benchmarks.savings_annual_rate, Decimal::ONE)?;
        check_range("benchmarks.cdb_cdi_share", benchmarks.cdb_cdi_share, MAX_CDB_CDI_SHARE)?;
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        log::debug!("loaded simulator config from {}", path.as_ref().display());
        Ok(config)
    }
}
