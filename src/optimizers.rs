use crate::prelude::*;

/// Adjusts weights after a misclassified sample.
pub trait LearningRule {
    fn update(&self, weights: &mut WeightVector, point: Point, target: Label);
}

/// Classical perceptron rule: `w += learning_rate · target · [x, y, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptronRule {
    pub learning_rate: f64,
}

impl PerceptronRule {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl LearningRule for PerceptronRule {
    fn update(&self, weights: &mut WeightVector, point: Point, target: Label) {
        weights.nudge(self.learning_rate * target.sign(), point);
    }
}
