use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating simulation inputs or loading configuration.
///
/// The calculation functions themselves never fail; only the boundary does.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("face value must be greater than zero, got {0}")]
    NonPositiveFaceValue(Decimal),

    #[error("face value must not exceed {max}, got {value}")]
    FaceValueTooLarge { value: Decimal, max: Decimal },

    #[error("annual rate must be zero or positive, got {0}%")]
    NegativeRate(Decimal),

    #[error("annual rate must not exceed {max}%, got {value}%")]
    RateTooLarge { value: Decimal, max: Decimal },

    #[error("investment period must be between {min} and {max} years, got {years}")]
    PeriodOutOfRange { years: u32, min: u32, max: u32 },

    #[error("configuration value {field} = {value} is outside [{min}, {max}]")]
    InvalidConfig {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
