use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightInit {
    Zeros,
    #[default]
    SmallRandom,
}

/// `[w_x, w_y, w_bias]`, scored against the augmented input `[x, y, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Array1<f64>);

impl WeightVector {
    pub fn new(w_x: f64, w_y: f64, w_bias: f64) -> Self {
        Self(array![w_x, w_y, w_bias])
    }

    pub fn zeros() -> Self {
        Self(Array1::zeros(3))
    }

    pub fn small_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(Array1::random_using(3, Uniform::new(-0.01, 0.01), rng))
    }

    pub fn init<R: Rng + ?Sized>(init: WeightInit, rng: &mut R) -> Self {
        match init {
            WeightInit::Zeros => Self::zeros(),
            WeightInit::SmallRandom => Self::small_random(rng),
        }
    }

    pub fn w_x(&self) -> f64 {
        self.0[0]
    }

    pub fn w_y(&self) -> f64 {
        self.0[1]
    }

    pub fn w_bias(&self) -> f64 {
        self.0[2]
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn augment(point: Point) -> Array1<f64> {
        array![point.x, point.y, 1.0]
    }

    pub fn score(&self, point: Point) -> f64 {
        self.0.dot(&Self::augment(point))
    }

    pub fn nudge(&mut self, alpha: f64, point: Point) {
        self.0.scaled_add(alpha, &Self::augment(point));
    }

    /// `None` while both input weights are zero.
    pub fn learned_line(&self) -> Option<LineParameters> {
        LineParameters::general(self.w_x(), self.w_y(), -self.w_bias()).ok()
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xwt {:.2} ywt {:.2} bwt {:.2}",
            self.w_x(),
            self.w_y(),
            self.w_bias()
        )
    }
}
