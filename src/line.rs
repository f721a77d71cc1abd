use crate::prelude::*;

/// Which side of a line a point lies on.
///
/// A point exactly on the line (signed value `0`) is `Negative`. The oracle
/// and the perceptron's own scoring share this rule through
/// [`Label::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Label::Positive => 1.0,
            Label::Negative => -1.0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "1"),
            Label::Negative => write!(f, "-1"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LineForm {
    /// `a·x + b·y = c`
    General { a: f64, b: f64, c: f64 },
    /// `y = m·x + b`
    SlopeIntercept { m: f64, b: f64 },
}

/// A validated, non-degenerate separating line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    form: LineForm,
}

impl LineParameters {
    pub fn general(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(ConfigError::InvalidLineDefinition(format!(
                "coefficients must be finite, got a={a} b={b} c={c}"
            )));
        }
        if a == 0.0 && b == 0.0 {
            return Err(ConfigError::InvalidLineDefinition(
                "a and b cannot both be zero".into(),
            ));
        }
        Ok(Self {
            form: LineForm::General { a, b, c },
        })
    }

    pub fn slope_intercept(m: f64, b: f64) -> Result<Self, ConfigError> {
        if !(m.is_finite() && b.is_finite()) {
            return Err(ConfigError::InvalidLineDefinition(format!(
                "slope and intercept must be finite, got m={m} b={b}"
            )));
        }
        Ok(Self {
            form: LineForm::SlopeIntercept { m, b },
        })
    }

    /// `a·x + b·y - c` for the general form, `y - (m·x + b)` for slope-intercept.
    pub fn signed_value(&self, point: Point) -> f64 {
        match self.form {
            LineForm::General { a, b, c } => a * point.x + b * point.y - c,
            LineForm::SlopeIntercept { m, b } => point.y - (m * point.x + b),
        }
    }

    /// The oracle: the true side of the line for `point`.
    pub fn classify(&self, point: Point) -> Label {
        Label::from_value(self.signed_value(point))
    }

    /// `(slope, intercept)`, or `None` for a vertical line.
    pub fn to_slope_intercept(&self) -> Option<(f64, f64)> {
        match self.form {
            LineForm::General { b, .. } if b == 0.0 => None,
            LineForm::General { a, b, c } => Some((-a / b, c / b)),
            LineForm::SlopeIntercept { m, b } => Some((m, b)),
        }
    }
}

/// Free-function form of [`LineParameters::classify`].
pub fn classify(point: Point, line: &LineParameters) -> Label {
    line.classify(point)
}

impl fmt::Display for LineParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            LineForm::General { a, b, c } if b == 0.0 => write!(f, "x = {:.1}", c / a),
            _ => {
                let (m, b) = self.to_slope_intercept().unwrap_or_default();
                let sign = if b < 0.0 { '-' } else { '+' };
                write!(f, "y = {:.1}x {} {:.1}", m, sign, b.abs())
            }
        }
    }
}

/// Anything that assigns a [`Label`] to a [`Point`].
pub trait Classifier {
    fn classify_point(&self, point: Point) -> Label;
}

impl Classifier for LineParameters {
    fn classify_point(&self, point: Point) -> Label {
        self.classify(point)
    }
}
