use thiserror::Error;

/// A detector configuration that cannot produce meaningful estimates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_frequency must be positive and below max_frequency")]
    FrequencyRange,
    #[error("ratio must be positive")]
    Ratio,
    #[error("sensitivity must lie in (0, 1]")]
    Sensitivity,
}
