//! Age and risk sampling for agent construction.
//!
//! Ages come either from the 2020 world age pyramid (five-year buckets) or,
//! when a positive mean is configured, from a normal distribution truncated
//! to the model's age range by redrawing. Pre-existing-condition risk grows
//! with age along a gamma CDF; with the default curve (shape 12, scale 4.5)
//! a 20-year-old carries about 0.2% risk, a 50-year-old 43%, a centenarian
//! over 99%.

use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::{Distribution, Gamma, Normal};

use crate::config::DemographicsConfig;
use crate::error::SimError;

/// Attempt cap for all rejection-sampling loops. Well beyond what any
/// non-degenerate configuration needs; hitting it reports
/// [`SimError::SamplingExhausted`] instead of spinning forever.
pub(crate) const MAX_REJECTION_DRAWS: u32 = 10_000;

/// Sample an agent age in `[0, age_max]`.
///
/// A non-positive `mean` draws a pyramid bucket by weight and adds a uniform
/// offset within the bucket. A positive `mean` draws from
/// `Normal(mean, age_std)` and redraws until the sample lands in range.
pub fn sample_age(
    config: &DemographicsConfig,
    mean: f64,
    rng: &mut SmallRng,
) -> Result<f64, SimError> {
    if mean <= 0.0 {
        let total: f64 = config.age_pyramid.iter().sum();
        let mut remaining = rng.gen::<f64>() * total;
        let mut bucket = config.age_pyramid.len() - 1;
        for (index, weight) in config.age_pyramid.iter().enumerate() {
            if remaining < *weight {
                bucket = index;
                break;
            }
            remaining -= weight;
        }

        let offset = config.age_offset_years * rng.gen::<f64>();
        return Ok(config.age_bucket_years * bucket as f64 + offset);
    }

    let normal = Normal::new(mean, config.age_std)?;
    for _ in 0..MAX_REJECTION_DRAWS {
        let age = normal.sample(rng);
        if (0.0..=config.age_max).contains(&age) {
            return Ok(age);
        }
    }
    Err(SimError::SamplingExhausted {
        what: "biased age",
        attempts: MAX_REJECTION_DRAWS,
    })
}

/// Bernoulli trial for a pre-existing condition, with success probability
/// equal to the risk curve's CDF at `age`.
pub fn sample_preexisting_condition(
    config: &DemographicsConfig,
    age: f64,
    rng: &mut SmallRng,
) -> bool {
    rng.gen::<f64>() < erlang_cdf(age, config.risk_curve.shape, config.risk_curve.scale)
}

/// Total illness length in days. The long duration applies with a
/// pre-existing condition, or for the elderly via a second independent trial
/// on the same risk curve.
pub fn sample_infection_duration(
    config: &DemographicsConfig,
    age: f64,
    preexisting_condition: bool,
    rng: &mut SmallRng,
) -> u32 {
    if preexisting_condition || sample_preexisting_condition(config, age, rng) {
        config.long_infection_days
    } else {
        config.short_infection_days
    }
}

/// Length of the pre-symptomatic infectious period, in (continuous) days.
pub fn sample_asymptomatic_duration(
    config: &DemographicsConfig,
    rng: &mut SmallRng,
) -> Result<f64, SimError> {
    let gamma = Gamma::new(config.incubation.shape, config.incubation.scale)?;
    Ok(gamma.sample(rng))
}

/// CDF of a gamma distribution with integer shape (the Erlang distribution):
/// `1 - e^(-x/scale) * sum_{n<shape} (x/scale)^n / n!`.
pub fn erlang_cdf(x: f64, shape: u32, scale: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let ratio = x / scale;
    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 1..shape {
        term *= ratio / n as f64;
        sum += term;
    }
    1.0 - (-ratio).exp() * sum
}
