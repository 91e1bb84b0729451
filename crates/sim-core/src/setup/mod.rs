//! Population initialization: spawning agents and seeding the index case.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::agent::{Agent, AgentProfile};
use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::spatial::Position;

/// Build the initial population. Per-agent biases are drawn uniformly from
/// the configured ranges; everyone starts susceptible at a uniform random
/// grid position.
pub fn spawn_population(
    config: &SimulationConfig,
    rng: &mut SmallRng,
) -> Result<Vec<Agent>, SimError> {
    let settings = &config.population;
    let mut population = Vec::with_capacity(settings.size);

    for _ in 0..settings.size {
        let profile = AgentProfile::new()
            .with_age_bias(settings.age_bias)
            .with_cleanliness(sample_range(settings.cleanliness, rng))
            .with_social_distance(sample_range(settings.social_distance, rng))
            .with_travel_energy(sample_range(settings.travel_energy, rng))
            .with_granularity(config.granularity);

        population.push(Agent::new(&profile, &config.demographics, rng)?);
    }

    tracing::info!(count = population.len(), "spawned population");
    Ok(population)
}

/// Seed the outbreak: infect one agent, move it to the domain center, and
/// zero its cleaning effectiveness so it cannot scrub its own trail.
pub fn seed_index_case(population: &mut [Agent], index: usize) -> Result<(), SimError> {
    let population_len = population.len();
    let agent = population.get_mut(index).ok_or_else(|| {
        SimError::InvalidConfig(format!(
            "index case {index} outside population of {population_len}"
        ))
    })?;

    agent.infect();
    agent.set_position(Position::new(0.5, 0.5))?;
    agent.set_cleanliness(0.0)?;

    tracing::info!(index, "seeded index case");
    Ok(())
}

fn sample_range(range: [f64; 2], rng: &mut SmallRng) -> f64 {
    let [min, max] = range;
    min + (max - min) * rng.gen::<f64>()
}
