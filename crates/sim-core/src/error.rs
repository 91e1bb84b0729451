//! Error types for the simulation kernel.
//!
//! The kernel has no I/O boundary of its own; errors are limited to invalid
//! configuration, exhausted rejection-sampling loops, and the file handling
//! done on behalf of the driver.

use thiserror::Error;

/// Errors produced by the simulation kernel.
#[derive(Debug, Error)]
pub enum SimError {
    /// A bias or model parameter is outside its documented bound.
    /// Construction fails fast rather than clamping silently.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A bounded rejection-sampling loop ran out of attempts. The caps are
    /// large enough that this only fires for degenerate setups (for example
    /// a zero travel energy with the agent stuck on the domain boundary).
    #[error("rejection sampling for {what} exhausted after {attempts} draws")]
    SamplingExhausted { what: &'static str, attempts: u32 },

    /// Invalid normal-distribution parameters reached a sampling site.
    #[error("invalid normal distribution: {0}")]
    BadNormal(#[from] rand_distr::NormalError),

    /// Invalid gamma-distribution parameters reached a sampling site.
    #[error("invalid gamma distribution: {0}")]
    BadGamma(#[from] rand_distr::GammaError),

    /// IO error while reading configuration or writing reports.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a TOML configuration file.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
