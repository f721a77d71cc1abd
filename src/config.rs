//! Run configuration: raw values from TOML or the command line, and the
//! validated [`Settings`] the trainer is built from.

use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Line coefficients as supplied, before the two forms are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineSpec {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
}

impl LineSpec {
    pub fn general(a: f64, b: f64, c: f64) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            ..Self::default()
        }
    }

    pub fn slope_intercept(slope: f64, intercept: f64) -> Self {
        Self {
            slope: Some(slope),
            intercept: Some(intercept),
            ..Self::default()
        }
    }

    /// General form needs `a` and `b` (`c` defaults to 0); slope-intercept
    /// needs `slope` (`intercept` defaults to 0). Mixing the two is an error.
    pub fn resolve(&self) -> Result<LineParameters, ConfigError> {
        let general = self.a.is_some() || self.b.is_some() || self.c.is_some();
        let slope = self.slope.is_some() || self.intercept.is_some();
        match (general, slope) {
            (true, true) => Err(ConfigError::InvalidLineDefinition(
                "general form (a, b, c) and slope-intercept form are mutually exclusive".into(),
            )),
            (true, false) => match (self.a, self.b) {
                (Some(a), Some(b)) => LineParameters::general(a, b, self.c.unwrap_or(0.0)),
                _ => Err(ConfigError::InvalidLineDefinition(
                    "general form needs both a and b".into(),
                )),
            },
            (false, true) => match self.slope {
                Some(m) => LineParameters::slope_intercept(m, self.intercept.unwrap_or(0.0)),
                None => Err(ConfigError::InvalidLineDefinition(
                    "slope-intercept form needs a slope".into(),
                )),
            },
            (false, false) => Err(ConfigError::InvalidLineDefinition(
                "no line given: supply a and b, or a slope".into(),
            )),
        }
    }
}

/// Unvalidated run configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    #[serde(flatten)]
    pub line: LineSpec,
    /// Learning rate.
    pub learn: f64,
    pub lowrange: f64,
    pub highrange: f64,
    /// Consecutive correct classifications required to stop.
    pub correct: i64,
    pub seed: Option<u64>,
    pub max_iterations: Option<u64>,
    pub init: WeightInit,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            line: LineSpec::default(),
            learn: 0.005,
            lowrange: -10.0,
            highrange: 10.0,
            correct: 100,
            seed: None,
            max_iterations: None,
            init: WeightInit::default(),
        }
    }
}

impl TrainingConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let line = self.line.resolve()?;
        let range = SampleRange::new(self.lowrange, self.highrange)?;
        if !self.learn.is_finite() || self.learn <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learn));
        }
        if self.correct <= 0 {
            return Err(ConfigError::InvalidTargetStreak(self.correct));
        }
        Ok(Settings {
            line,
            range,
            learning_rate: self.learn,
            target_streak: self.correct as u64,
            seed: self.seed,
            max_iterations: self.max_iterations,
            init: self.init,
        })
    }
}

/// Validated configuration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub line: LineParameters,
    pub range: SampleRange,
    pub learning_rate: f64,
    pub target_streak: u64,
    pub seed: Option<u64>,
    pub max_iterations: Option<u64>,
    pub init: WeightInit,
}
