pub use serde::Deserialize;

pub use std::fmt;

pub use crossbeam_channel::Sender;
pub use ndarray::prelude::*;
pub use ndarray_rand::rand_distr::{Distribution, Uniform};
pub use ndarray_rand::RandomExt;
pub use rand::{Rng, SeedableRng};
pub use rand_chacha::ChaCha8Rng;
pub use tracing::{debug, info, trace, warn};

pub use crate::config::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::optimizers::*;
pub use crate::perceptron::*;
pub use crate::sampler::*;
pub use crate::trainer::*;
pub use crate::weights::*;

pub use crate::point;
pub use crate::weight_vector;
