use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub iteration: u64,
    pub point: Point,
    pub target: Label,
    pub predicted: Label,
    pub correct: bool,
    pub updated: bool,
    pub correct_streak: u64,
    pub weights: WeightVector,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} target: {} result: {} x: {:.2} y: {:.2} {}",
            self.iteration, self.correct, self.target, self.predicted, self.point.x, self.point.y, self.weights
        )?;
        if !self.correct {
            write!(f, " {}", "*".repeat(58))?;
        }
        Ok(())
    }
}

pub trait ProgressSink {
    fn report(&mut self, step: &Step);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressSink for Silent {
    fn report(&mut self, _step: &Step) {}
}

impl<F: FnMut(&Step)> ProgressSink for F {
    fn report(&mut self, step: &Step) {
        self(step)
    }
}

#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Step>,
    hung_up: bool,
}

impl ChannelSink {
    pub fn new(tx: Sender<Step>) -> Self {
        Self { tx, hung_up: false }
    }
}

impl ProgressSink for ChannelSink {
    fn report(&mut self, step: &Step) {
        if self.hung_up {
            return;
        }
        if self.tx.send(step.clone()).is_err() {
            debug!(iteration = step.iteration, "progress receiver hung up");
            self.hung_up = true;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converged,
    IterationCapReached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub outcome: Outcome,
    pub iterations: u64,
    pub correct_streak: u64,
    pub weights: WeightVector,
}

impl TrainingSummary {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    pub fn learned_line(&self) -> Option<LineParameters> {
        self.weights.learned_line()
    }
}

/// Drives a [`Perceptron`] against the oracle line until it converges.
pub struct Trainer<R = ChaCha8Rng> {
    line: LineParameters,
    sampler: PointSampler<R>,
    perceptron: Perceptron,
    max_iterations: Option<u64>,
    iteration: u64,
}

impl Trainer<ChaCha8Rng> {
    /// Seeds from `settings.seed`, or from OS entropy when unset.
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(settings: &Settings, mut rng: R) -> Self {
        let weights = WeightVector::init(settings.init, &mut rng);
        Self {
            line: settings.line,
            sampler: PointSampler::new(settings.range, rng),
            perceptron: Perceptron::new(weights, settings.learning_rate, settings.target_streak),
            max_iterations: settings.max_iterations,
            iteration: 0,
        }
    }

    pub fn perceptron(&self) -> &Perceptron {
        &self.perceptron
    }

    pub fn step(&mut self) -> Step {
        let point = self.sampler.next_point();
        let target = self.line.classify(point);
        let StepOutcome { predicted, updated } = self.perceptron.train_step(point, target);
        self.iteration += 1;

        let step = Step {
            iteration: self.iteration,
            point,
            target,
            predicted,
            correct: !updated,
            updated,
            correct_streak: self.perceptron.state().correct_streak,
            weights: self.perceptron.weights().clone(),
        };
        debug!(
            iteration = step.iteration,
            correct = step.correct,
            streak = step.correct_streak,
            "training step"
        );
        step
    }

    pub fn run<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) -> TrainingSummary {
        let outcome = loop {
            if self.perceptron.is_converged() {
                break Outcome::Converged;
            }
            if self.max_iterations.map_or(false, |cap| self.iteration >= cap) {
                break Outcome::IterationCapReached;
            }
            let step = self.step();
            sink.report(&step);
        };

        let summary = TrainingSummary {
            outcome,
            iterations: self.iteration,
            correct_streak: self.perceptron.state().correct_streak,
            weights: self.perceptron.weights().clone(),
        };
        match outcome {
            Outcome::Converged => info!(
                iterations = summary.iterations,
                streak = summary.correct_streak,
                "perceptron converged"
            ),
            Outcome::IterationCapReached => warn!(
                iterations = summary.iterations,
                streak = summary.correct_streak,
                "iteration cap reached before convergence"
            ),
        }
        summary
    }
}
