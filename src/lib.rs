pub mod prelude;

pub mod config;
pub mod error;
pub mod line;
pub mod optimizers;
pub mod perceptron;
pub mod sampler;
pub mod trainer;
pub mod utils;
pub mod weights;

#[allow(unused_imports)]
use crate::prelude::*;

#[test]
fn test1() {
    // x = y, sampled from [-10, 10]
    let line = LineParameters::general(1.0, -1.0, 0.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut sampler = PointSampler::new(SampleRange::new(-10.0, 10.0).unwrap(), ChaCha8Rng::seed_from_u64(2));
    let mut perceptron = Perceptron::new(WeightVector::small_random(&mut rng), 0.005, 5);

    let mut i = 0;
    while !perceptron.is_converged() {
        i += 1;
        let p = sampler.next_point();
        let target = line.classify(p);
        let out = perceptron.train_step(p, target);
        println!("{i}. {} target: {target} result: {} {}", !out.updated, out.predicted, perceptron.weights());
        assert!(i < 100_000);
    }
    println!("learned {:?}", perceptron.weights().learned_line().map(|l| l.to_string()));
}

#[test]
fn test2() {
    let mut p = Perceptron::new(weight_vector![0.0, 0.0, 0.0], 0.5, 3);

    // on the boundary: both sides agree on -1
    assert_eq!(p.predict(point![1.0, 1.0]), Label::Negative);
    assert_eq!(
        LineParameters::general(1.0, -1.0, 0.0).unwrap().classify(point![1.0, 1.0]),
        Label::Negative
    );

    p.train_step(point![2.0, 1.0], Label::Positive);
    assert_eq!(p.weights(), &weight_vector![1.0, 0.5, 0.5]);
    assert_eq!(p.predict(point![2.0, 1.0]), Label::Positive);
}
