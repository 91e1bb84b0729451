//! The environment: a discretized viral-load field over the unit square.
//!
//! The field is the only channel through which agents influence each other's
//! infection risk. Each day every living agent that sheds or cleans perturbs
//! the cells around it, and the whole field then decays by the attenuation
//! factor.

use crate::components::agent::Agent;
use crate::error::SimError;

/// Discretized scalar field of viral load, indexed by grid cell, with every
/// cell clamped to [0, 1].
#[derive(Debug, Clone)]
pub struct Environment {
    granularity: u32,
    /// Cells per axis minus one: positions scale by this factor.
    scale: usize,
    /// Cells per axis (`scale + 1`).
    dim: usize,
    attenuation: f64,
    area_of_effect: usize,
    /// Per-distance deposit factors `attenuation^(d/2)` for d in 0..=AOE.
    falloff: Vec<f64>,
    cells: Vec<f64>,
}

impl Environment {
    /// Create an empty field. Fails fast on parameters outside their
    /// documented bounds.
    pub fn new(
        granularity: u32,
        attenuation: f64,
        area_of_effect: usize,
    ) -> Result<Self, SimError> {
        if !(1..=4).contains(&granularity) {
            return Err(SimError::InvalidConfig(format!(
                "granularity must be in [1, 4], got {granularity}"
            )));
        }
        if !(attenuation > 0.0 && attenuation < 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "attenuation must be in (0, 1), got {attenuation}"
            )));
        }

        let scale = 10usize.pow(granularity);
        let dim = scale + 1;
        let falloff = (0..=area_of_effect)
            .map(|d| attenuation.powf(d as f64 / 2.0))
            .collect();

        Ok(Self {
            granularity,
            scale,
            dim,
            attenuation,
            area_of_effect,
            falloff,
            cells: vec![0.0; dim * dim],
        })
    }

    /// Fold the population's deposits and cleaning into the field, then
    /// apply the daily decay.
    ///
    /// Each agent's full deposit-then-clean pair is applied before moving on
    /// to the next agent, so clamp behavior at saturated or empty cells is
    /// independent of how contributions would otherwise interleave.
    pub fn update(&mut self, population: &[Agent]) {
        for agent in population {
            if !agent.is_alive() {
                continue;
            }
            let sheds = agent.is_infected();
            let cleans = agent.cleanliness() > 0.0;
            if !sheds && !cleans {
                continue;
            }

            let (ci, cj) = agent.position().cell(self.scale);
            let radius = self.area_of_effect as isize;
            let ci = ci as isize;
            let cj = cj as isize;

            for i in (ci - radius).max(0)..=(ci + radius).min(self.scale as isize) {
                for j in (cj - radius).max(0)..=(cj + radius).min(self.scale as isize) {
                    let d = ((i - ci).abs() + (j - cj).abs()) as usize;
                    if d > self.area_of_effect {
                        continue;
                    }

                    let falloff = self.falloff[d];
                    let index = i as usize * self.dim + j as usize;
                    let cell = &mut self.cells[index];
                    if sheds {
                        *cell = (*cell + falloff).min(1.0);
                    }
                    *cell = (*cell - agent.cleanliness() * falloff).max(0.0);
                }
            }
        }

        for cell in &mut self.cells {
            *cell *= self.attenuation;
        }
    }

    /// Viral load at a cell.
    pub fn load(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.dim + j]
    }

    /// Set the load at a cell directly, clamped to [0, 1]. Scenario-setup
    /// hook for drivers and tests.
    pub fn set_load(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.dim + j] = value.clamp(0.0, 1.0);
    }

    /// The whole field, row major with stride [`Self::dim`].
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Position multiplier when mapping to cell indices.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Cells per axis.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    pub fn attenuation(&self) -> f64 {
        self.attenuation
    }

    pub fn area_of_effect(&self) -> usize {
        self.area_of_effect
    }
}
