use crate::prelude::*;

/// Closed sampling interval shared by both coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    low: f64,
    high: f64,
}

impl SampleRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        if !(low.is_finite() && high.is_finite()) || low >= high || !(high - low).is_finite() {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }
}

/// Pulls independent uniform points from a caller-owned RNG. Never exhausts.
pub struct PointSampler<R> {
    rng: R,
    dist: Uniform<f64>,
}

impl<R: Rng> PointSampler<R> {
    pub fn new(range: SampleRange, rng: R) -> Self {
        Self {
            rng,
            dist: Uniform::new_inclusive(range.low, range.high),
        }
    }

    pub fn next_point(&mut self) -> Point {
        let x = self.dist.sample(&mut self.rng);
        let y = self.dist.sample(&mut self.rng);
        Point::new(x, y)
    }
}

impl<R: Rng> Iterator for PointSampler<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.next_point())
    }
}
