//! Configuration loading for the simulation.
//!
//! All model constants live here rather than as embedded literals so that
//! tests and experiments can override the tables (mortality brackets, risk
//! curves, the world age pyramid) from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimError;

/// Complete simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Hard cap on simulated days.
    pub max_days: u64,
    /// Days to keep simulating after the last infection clears.
    pub extra_days: u32,
    /// Grid resolution exponent: the field has `10^granularity + 1` cells
    /// per axis and positions are rounded to `granularity` decimals.
    pub granularity: u32,
    /// Population spawning settings.
    pub population: PopulationConfig,
    /// Viral-load field settings.
    pub environment: EnvironmentConfig,
    /// Age, risk, and illness-duration distributions.
    pub demographics: DemographicsConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_days: 1000,
            extra_days: 10,
            granularity: 2,
            population: PopulationConfig::default(),
            environment: EnvironmentConfig::default(),
            demographics: DemographicsConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate every parameter against its documented bound. Construction
    /// of agents and the environment assumes a validated configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(1..=4).contains(&self.granularity) {
            return Err(invalid(format!(
                "granularity must be in [1, 4], got {}",
                self.granularity
            )));
        }
        self.population.validate()?;
        self.environment.validate()?;
        self.demographics.validate()
    }
}

/// Population spawning settings. Per-agent biases are drawn uniformly from
/// the configured `[min, max]` ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of agents to spawn.
    pub size: usize,
    /// Mean for age sampling; non-positive selects the world age pyramid.
    pub age_bias: f64,
    /// Cleaning effectiveness range, within [0, 1].
    pub cleanliness: [f64; 2],
    /// Social-distancing effectiveness range, within [0, 1].
    pub social_distance: [f64; 2],
    /// Travel energy range; 1 gives motion at the grid-cell scale.
    pub travel_energy: [f64; 2],
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 250,
            age_bias: -1.0,
            cleanliness: [0.0, 0.0],
            social_distance: [0.0, 0.0],
            travel_energy: [1.0, 3.5],
        }
    }
}

impl PopulationConfig {
    fn validate(&self) -> Result<(), SimError> {
        if self.size == 0 {
            return Err(invalid("population size must be at least 1".into()));
        }
        if !self.age_bias.is_finite() {
            return Err(invalid(format!("age_bias must be finite, got {}", self.age_bias)));
        }
        check_range("cleanliness", self.cleanliness, 0.0, 1.0)?;
        check_range("social_distance", self.social_distance, 0.0, 1.0)?;
        check_range("travel_energy", self.travel_energy, 0.0, f64::INFINITY)?;
        Ok(())
    }
}

/// Viral-load field settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Daily multiplicative decay of the field, in (0, 1).
    pub attenuation: f64,
    /// Taxicab radius within which an agent perturbs the field.
    pub area_of_effect: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            attenuation: 0.4,
            area_of_effect: 5,
        }
    }
}

impl EnvironmentConfig {
    fn validate(&self) -> Result<(), SimError> {
        if !(self.attenuation > 0.0 && self.attenuation < 1.0) {
            return Err(invalid(format!(
                "attenuation must be in (0, 1), got {}",
                self.attenuation
            )));
        }
        Ok(())
    }
}

/// Gamma-distribution parameters with integer shape, used where the CDF is
/// needed in closed form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskCurve {
    pub shape: u32,
    pub scale: f64,
}

/// Gamma-distribution parameters for sampling only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GammaParams {
    pub shape: f64,
    pub scale: f64,
}

/// A mortality bracket: `rate` applies to ages strictly below `below`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MortalityBracket {
    pub below: f64,
    pub rate: f64,
}

/// Aggregate illness-duration mortality rates by age decade, plus the flat
/// rate for agents with a pre-existing condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MortalityConfig {
    /// Flat aggregate rate when a pre-existing condition is present.
    pub condition_rate: f64,
    /// Ascending age brackets; the first bracket with `age < below` applies.
    pub brackets: Vec<MortalityBracket>,
    /// Rate for ages beyond the last bracket.
    pub default_rate: f64,
}

impl Default for MortalityConfig {
    fn default() -> Self {
        Self {
            condition_rate: 0.105,
            brackets: vec![
                MortalityBracket { below: 40.0, rate: 0.002 },
                MortalityBracket { below: 50.0, rate: 0.004 },
                MortalityBracket { below: 60.0, rate: 0.013 },
                MortalityBracket { below: 70.0, rate: 0.036 },
                MortalityBracket { below: 80.0, rate: 0.08 },
            ],
            default_rate: 0.148,
        }
    }
}

impl MortalityConfig {
    /// Aggregate illness-duration death rate for an agent: the maximum of
    /// the age-bracket rate and, when present, the condition rate.
    pub fn aggregate_rate(&self, age: f64, preexisting_condition: bool) -> f64 {
        let age_rate = self
            .brackets
            .iter()
            .find(|b| age < b.below)
            .map(|b| b.rate)
            .unwrap_or(self.default_rate);

        if preexisting_condition {
            age_rate.max(self.condition_rate)
        } else {
            age_rate
        }
    }

    fn validate(&self) -> Result<(), SimError> {
        for rate in self
            .brackets
            .iter()
            .map(|b| b.rate)
            .chain([self.condition_rate, self.default_rate])
        {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(format!("mortality rate must be in [0, 1], got {rate}")));
            }
        }
        if self.brackets.windows(2).any(|w| w[0].below >= w[1].below) {
            return Err(invalid("mortality brackets must be strictly ascending".into()));
        }
        Ok(())
    }
}

/// Age, risk, and illness-duration distributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicsConfig {
    /// Maximum age in the model.
    pub age_max: f64,
    /// Standard deviation for age sampling in biased (normal) mode.
    pub age_std: f64,
    /// Width in years of one pyramid bucket.
    pub age_bucket_years: f64,
    /// Width in years of the uniform offset added within a bucket.
    pub age_offset_years: f64,
    /// Relative weights of the five-year world age buckets (2020 world
    /// population, 0-4 through 100-104). Normalized at sampling time.
    pub age_pyramid: Vec<f64>,
    /// Age-risk curve: pre-existing-condition probability is its CDF at the
    /// agent's age. Also drives the elderly long-illness trial.
    pub risk_curve: RiskCurve,
    /// Distribution of the pre-symptomatic (infectious) period, in days.
    pub incubation: GammaParams,
    /// Illness length without aggravating factors, in days.
    pub short_infection_days: u32,
    /// Illness length with a pre-existing condition or for the elderly.
    pub long_infection_days: u32,
    /// Daily death-risk tables for the symptomatic phase.
    pub mortality: MortalityConfig,
}

impl Default for DemographicsConfig {
    fn default() -> Self {
        Self {
            age_max: 104.0,
            age_std: 10.0,
            age_bucket_years: 5.0,
            age_offset_years: 4.0,
            age_pyramid: vec![
                349_432_556.0,
                342_927_576.0,
                331_497_486.0,
                316_642_222.0,
                308_286_775.0,
                306_059_387.0,
                309_236_984.0,
                276_447_037.0,
                249_389_688.0,
                241_232_876.0,
                222_609_691.0,
                192_215_395.0,
                157_180_267.0,
                128_939_392.0,
                87_185_982.0,
                54_754_941.0,
                33_648_953.0,
                15_756_942.0,
                5_327_866.0,
                1_077_791.0,
                124_144.0,
            ],
            risk_curve: RiskCurve { shape: 12, scale: 4.5 },
            incubation: GammaParams { shape: 3.0, scale: 2.0 },
            short_infection_days: 14,
            long_infection_days: 28,
            mortality: MortalityConfig::default(),
        }
    }
}

impl DemographicsConfig {
    fn validate(&self) -> Result<(), SimError> {
        if !(self.age_max > 0.0 && self.age_max.is_finite()) {
            return Err(invalid(format!("age_max must be positive, got {}", self.age_max)));
        }
        if !(self.age_std > 0.0 && self.age_std.is_finite()) {
            return Err(invalid(format!("age_std must be positive, got {}", self.age_std)));
        }
        if self.age_pyramid.is_empty() || self.age_pyramid.iter().any(|w| *w < 0.0) {
            return Err(invalid("age_pyramid must be non-empty with non-negative weights".into()));
        }
        if self.age_pyramid.iter().sum::<f64>() <= 0.0 {
            return Err(invalid("age_pyramid weights must sum to a positive value".into()));
        }
        if self.risk_curve.shape == 0 || self.risk_curve.scale <= 0.0 {
            return Err(invalid("risk_curve requires a positive shape and scale".into()));
        }
        if self.incubation.shape <= 0.0 || self.incubation.scale <= 0.0 {
            return Err(invalid("incubation requires a positive shape and scale".into()));
        }
        if self.short_infection_days == 0 || self.long_infection_days == 0 {
            return Err(invalid("infection durations must be at least one day".into()));
        }
        self.mortality.validate()
    }
}

fn invalid(message: String) -> SimError {
    SimError::InvalidConfig(message)
}

fn check_range(name: &str, range: [f64; 2], lo: f64, hi: f64) -> Result<(), SimError> {
    let [min, max] = range;
    if !(min.is_finite() && max.is_finite() && min <= max && min >= lo && max <= hi) {
        return Err(invalid(format!(
            "{name} range [{min}, {max}] must be ordered and within [{lo}, {hi}]"
        )));
    }
    Ok(())
}
