use crate::prelude::*;

/// Streak bookkeeping for one training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingState {
    pub correct_streak: u64,
    pub target_streak: u64,
}

impl TrainingState {
    pub fn new(target_streak: u64) -> Self {
        Self {
            correct_streak: 0,
            target_streak,
        }
    }

    /// Next state after a prediction: `+1` when correct, back to `0` otherwise.
    #[must_use]
    pub fn advance(self, correct: bool) -> Self {
        Self {
            correct_streak: if correct { self.correct_streak + 1 } else { 0 },
            ..self
        }
    }

    pub fn is_converged(&self) -> bool {
        self.correct_streak >= self.target_streak
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub predicted: Label,
    pub updated: bool,
}

/// Single neuron over `(x, y)` with a bias input.
#[derive(Debug, Clone)]
pub struct Perceptron<L = PerceptronRule> {
    weights: WeightVector,
    state: TrainingState,
    rule: L,
}

impl Perceptron<PerceptronRule> {
    pub fn new(weights: WeightVector, learning_rate: f64, target_streak: u64) -> Self {
        Self::with_rule(weights, PerceptronRule::new(learning_rate), target_streak)
    }
}

impl<L: LearningRule> Perceptron<L> {
    pub fn with_rule(weights: WeightVector, rule: L, target_streak: u64) -> Self {
        Self {
            weights,
            state: TrainingState::new(target_streak),
            rule,
        }
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    pub fn predict(&self, point: Point) -> Label {
        Label::from_value(self.weights.score(point))
    }

    pub fn train_step(&mut self, point: Point, target: Label) -> StepOutcome {
        let predicted = self.predict(point);
        let correct = predicted == target;
        self.state = self.state.advance(correct);
        if !correct {
            self.rule.update(&mut self.weights, point, target);
            trace!(weights = %self.weights, "weights updated");
        }
        StepOutcome {
            predicted,
            updated: !correct,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }
}

impl<L: LearningRule> Classifier for Perceptron<L> {
    fn classify_point(&self, point: Point) -> Label {
        self.predict(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> LineParameters {
        LineParameters::general(1.0, -1.0, 0.0).unwrap()
    }

    #[test]
    fn zero_weights_predict_negative() {
        let p = Perceptron::new(WeightVector::zeros(), 0.005, 5);
        assert_eq!(p.predict(Point::new(3.0, -2.0)), Label::Negative);
    }

    #[test]
    fn predict_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let p = Perceptron::new(WeightVector::small_random(&mut rng), 0.005, 5);
        for _ in 0..100 {
            let pt = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            assert_eq!(p.predict(pt), p.predict(pt));
        }
    }

    #[test]
    fn correct_prediction_extends_streak_without_update() {
        let mut p = Perceptron::new(WeightVector::new(1.0, -1.0, 0.0), 0.005, 5);
        let before = p.weights().clone();
        let out = p.train_step(Point::new(4.0, 1.0), Label::Positive);
        assert_eq!(out, StepOutcome { predicted: Label::Positive, updated: false });
        assert_eq!(p.state().correct_streak, 1);
        assert_eq!(p.weights(), &before);
    }

    #[test]
    fn misprediction_resets_streak_and_applies_rule() {
        let mut p = Perceptron::new(WeightVector::zeros(), 0.005, 5);
        p.train_step(Point::new(-3.0, 2.0), Label::Negative);
        p.train_step(Point::new(-1.0, 6.0), Label::Negative);
        assert_eq!(p.state().correct_streak, 2);

        let pt = Point::new(4.0, 1.5);
        let out = p.train_step(pt, Label::Positive);
        assert_eq!(out, StepOutcome { predicted: Label::Negative, updated: true });
        assert_eq!(p.state().correct_streak, 0);
        assert_eq!(p.weights(), &WeightVector::new(0.005 * 4.0, 0.005 * 1.5, 0.005));
    }

    #[test]
    fn streak_follows_every_step() {
        let line = diagonal();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut p = Perceptron::new(WeightVector::small_random(&mut rng), 0.005, u64::MAX);
        for _ in 0..2000 {
            let pt = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let previous = p.state().correct_streak;
            let out = p.train_step(pt, line.classify(pt));
            if out.updated {
                assert_eq!(p.state().correct_streak, 0);
            } else {
                assert_eq!(p.state().correct_streak, previous + 1);
            }
        }
    }

    #[test]
    fn converges_at_target_streak() {
        let state = (0..3).fold(TrainingState::new(3), |s, _| s.advance(true));
        assert!(state.is_converged());
        assert!(!state.advance(false).is_converged());
    }
}
