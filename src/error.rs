use thiserror::Error;

/// Everything that can be wrong with a run's configuration.
///
/// All of these are raised by validation before the first training step.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid line definition: {0}")]
    InvalidLineDefinition(String),

    #[error("invalid range: lowrange ({low}) must be finite and below highrange ({high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("invalid learning rate {0}: must be finite and greater than zero")]
    InvalidLearningRate(f64),

    #[error("invalid target streak {0}: must be at least 1")]
    InvalidTargetStreak(i64),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
