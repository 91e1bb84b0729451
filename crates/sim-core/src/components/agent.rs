//! Agents: identity, biases, position, and the health state machine.
//!
//! An agent is constructed once with a fully sampled age/risk profile and
//! then mutated exactly once per simulated day through [`Agent::update`].
//! Infection pressure reaches the agent only through the environment's
//! viral-load field; there is no direct agent-to-agent transmission.

use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::components::environment::Environment;
use crate::config::DemographicsConfig;
use crate::demographics::{
    sample_age, sample_asymptomatic_duration, sample_infection_duration,
    sample_preexisting_condition, MAX_REJECTION_DRAWS,
};
use crate::error::SimError;
use crate::spatial::{nearest_neighbors, GaussianKde, Position};

/// Neighbours consulted when picking a socially distanced destination.
const NEIGHBOR_COUNT: usize = 10;
/// Candidate destinations scored in the socially distanced branch.
const CANDIDATE_COUNT: usize = 10;
/// Travel-energy multiplier while symptomatic.
const SYMPTOMATIC_SLOWDOWN: f64 = 0.5;

/// Health state of an agent, with phase timers carried as payload so that
/// contradictory flag combinations cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthState {
    /// Never infected; exposed to the viral-load field every day.
    Susceptible,
    /// Infectious but not yet symptomatic. `remaining` is the sampled
    /// pre-symptomatic period, counted down one day at a time.
    Incubating { remaining: f64 },
    /// Symptomatic: slowed movement and a daily death draw. `remaining`
    /// counts down the illness; reaching zero means recovery.
    Symptomatic { remaining: u32 },
    /// Recovered with permanent immunity.
    Recovered,
    /// Terminal. A dead agent never moves or changes state again.
    Dead,
}

/// Construction-time biases for a single agent. Values outside the
/// documented bounds are rejected by [`Agent::new`].
#[derive(Debug, Clone)]
pub struct AgentProfile {
    /// Mean for age sampling; non-positive selects the world age pyramid.
    pub age_bias: f64,
    /// Effectiveness at cleaning the environment, in [0, 1].
    pub cleanliness: f64,
    /// Effectiveness at making social-distancing choices, in [0, 1].
    pub social_distance: f64,
    /// Travel energy; 1 gives motion at the grid-cell scale.
    pub travel_energy: f64,
    /// Grid resolution exponent shared with the environment.
    pub granularity: u32,
    /// Optional bias for the initial location; uniform when absent.
    pub initial_location: Option<Position>,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            age_bias: -1.0,
            cleanliness: 0.0,
            social_distance: 0.0,
            travel_energy: 1.0,
            granularity: 2,
            initial_location: None,
        }
    }
}

impl AgentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age_bias(mut self, age_bias: f64) -> Self {
        self.age_bias = age_bias;
        self
    }

    pub fn with_cleanliness(mut self, cleanliness: f64) -> Self {
        self.cleanliness = cleanliness;
        self
    }

    pub fn with_social_distance(mut self, social_distance: f64) -> Self {
        self.social_distance = social_distance;
        self
    }

    pub fn with_travel_energy(mut self, travel_energy: f64) -> Self {
        self.travel_energy = travel_energy;
        self
    }

    pub fn with_granularity(mut self, granularity: u32) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_initial_location(mut self, location: Position) -> Self {
        self.initial_location = Some(location);
        self
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.age_bias.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "age_bias must be finite, got {}",
                self.age_bias
            )));
        }
        if !(0.0..=1.0).contains(&self.cleanliness) {
            return Err(SimError::InvalidConfig(format!(
                "cleanliness must be in [0, 1], got {}",
                self.cleanliness
            )));
        }
        if !(0.0..=1.0).contains(&self.social_distance) {
            return Err(SimError::InvalidConfig(format!(
                "social_distance must be in [0, 1], got {}",
                self.social_distance
            )));
        }
        if !(self.travel_energy.is_finite() && self.travel_energy >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "travel_energy must be non-negative, got {}",
                self.travel_energy
            )));
        }
        if !(1..=4).contains(&self.granularity) {
            return Err(SimError::InvalidConfig(format!(
                "granularity must be in [1, 4], got {}",
                self.granularity
            )));
        }
        if let Some(location) = self.initial_location {
            if !location.in_unit_square() {
                return Err(SimError::InvalidConfig(format!(
                    "initial_location ({}, {}) outside the unit square",
                    location.x, location.y
                )));
            }
        }
        Ok(())
    }
}

/// Read-only view of the rest of the population while one agent updates.
///
/// Built from split borrows of the population slice, so predecessors are
/// seen at their already-updated positions and successors at their
/// not-yet-updated ones, preserving the sequential update semantics.
pub struct Peers<'a> {
    before: &'a [Agent],
    after: &'a [Agent],
}

impl<'a> Peers<'a> {
    pub fn new(before: &'a [Agent], after: &'a [Agent]) -> Self {
        Self { before, after }
    }

    /// Positions of all other agents, in population order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.before
            .iter()
            .chain(self.after.iter())
            .map(|agent| agent.position())
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single agent in the simulation.
#[derive(Debug, Clone)]
pub struct Agent {
    age: f64,
    preexisting_condition: bool,
    infection_duration: u32,
    asymptomatic_duration: f64,
    cleanliness: f64,
    social_distance: f64,
    travel_energy_base: f64,
    travel_energy: f64,
    granularity: u32,
    position: Position,
    state: HealthState,
}

impl Agent {
    /// Construct an agent with a freshly sampled age/risk profile.
    ///
    /// Fails fast on any bias outside its documented bound.
    pub fn new(
        profile: &AgentProfile,
        demographics: &DemographicsConfig,
        rng: &mut SmallRng,
    ) -> Result<Self, SimError> {
        profile.validate()?;

        let age = sample_age(demographics, profile.age_bias, rng)?;
        let preexisting_condition = sample_preexisting_condition(demographics, age, rng);
        let infection_duration =
            sample_infection_duration(demographics, age, preexisting_condition, rng);
        let asymptomatic_duration = sample_asymptomatic_duration(demographics, rng)?;

        let position = match profile.initial_location {
            Some(bias) => {
                // Normal scatter at the single-cell scale around the bias,
                // clamped to the domain rather than redrawn.
                let cell = 10f64.powi(-(profile.granularity as i32));
                let x = Normal::new(bias.x, cell)?.sample(rng);
                let y = Normal::new(bias.y, cell)?.sample(rng);
                let rounded = Position::rounded(x, y, profile.granularity);
                Position::new(rounded.x.clamp(0.0, 1.0), rounded.y.clamp(0.0, 1.0))
            }
            None => Position::rounded(rng.gen(), rng.gen(), profile.granularity),
        };

        Ok(Self {
            age,
            preexisting_condition,
            infection_duration,
            asymptomatic_duration,
            cleanliness: profile.cleanliness,
            social_distance: profile.social_distance,
            travel_energy_base: profile.travel_energy,
            travel_energy: profile.travel_energy,
            granularity: profile.granularity,
            position,
            state: HealthState::Susceptible,
        })
    }

    /// One simulated day: move, then either roll for exposure or advance
    /// the illness. Dead agents are inert.
    pub fn update(
        &mut self,
        landscape: &Environment,
        peers: &Peers<'_>,
        demographics: &DemographicsConfig,
        rng: &mut SmallRng,
    ) -> Result<(), SimError> {
        if !self.is_alive() {
            return Ok(());
        }

        self.position = self.choose_destination(peers, rng)?;

        match self.state {
            HealthState::Susceptible => {
                let (i, j) = self.position.cell(landscape.scale());
                if rng.gen::<f64>() < landscape.load(i, j) {
                    self.infect();
                }
            }
            HealthState::Incubating { remaining } => {
                let remaining = remaining - 1.0;
                if remaining <= 0.0 {
                    self.state = HealthState::Symptomatic {
                        remaining: self.infection_duration,
                    };
                } else {
                    self.state = HealthState::Incubating { remaining };
                }
            }
            HealthState::Symptomatic { remaining } => {
                self.symptomatic_day(remaining, demographics, rng);
            }
            HealthState::Recovered | HealthState::Dead => {}
        }

        Ok(())
    }

    /// One symptomatic day: slowed travel, the illness countdown, and the
    /// daily death draw on every day but the recovery day.
    fn symptomatic_day(
        &mut self,
        remaining: u32,
        demographics: &DemographicsConfig,
        rng: &mut SmallRng,
    ) {
        self.travel_energy = self.travel_energy_base * SYMPTOMATIC_SLOWDOWN;

        let remaining = remaining - 1;
        if remaining == 0 {
            self.state = HealthState::Recovered;
            self.travel_energy = self.travel_energy_base;
            tracing::debug!(age = self.age, "agent recovered");
            return;
        }
        self.state = HealthState::Symptomatic { remaining };

        // Convert the aggregate illness mortality into a per-day hazard:
        // survive each day with probability (1 - rate)^(1/duration).
        let rate = demographics
            .mortality
            .aggregate_rate(self.age, self.preexisting_condition);
        let daily_survival = (1.0 - rate).powf(1.0 / self.infection_duration as f64);
        if rng.gen::<f64>() >= daily_survival {
            self.state = HealthState::Dead;
            tracing::debug!(age = self.age, "agent died");
        }
    }

    /// Pick the day's destination.
    ///
    /// Without social distancing a single perturbed candidate is accepted
    /// unconditionally. With social distancing, ten candidates are scored
    /// against a kernel density estimate over the ten nearest other agents
    /// and the least crowded one wins, ties to the earliest candidate.
    fn choose_destination(
        &self,
        peers: &Peers<'_>,
        rng: &mut SmallRng,
    ) -> Result<Position, SimError> {
        let sigma = self.travel_energy * 10f64.powi(-(self.granularity as i32));

        if rng.gen::<f64>() > self.social_distance {
            return self.sample_candidate(sigma, rng);
        }

        let neighbors =
            nearest_neighbors(self.position, peers.positions(), NEIGHBOR_COUNT);
        let kde = GaussianKde::fit(&neighbors);

        let mut best: Option<(f64, Position)> = None;
        for _ in 0..CANDIDATE_COUNT {
            let candidate = self.sample_candidate(sigma, rng)?;
            let score = kde.density(candidate);
            if best.map_or(true, |(lowest, _)| score < lowest) {
                best = Some((score, candidate));
            }
        }
        // CANDIDATE_COUNT > 0, so a candidate was always recorded.
        match best {
            Some((_, position)) => Ok(position),
            None => Ok(self.position),
        }
    }

    /// Rejection-sample one candidate: a normal perturbation of the current
    /// position, rounded to the grid, redrawn until strictly inside the
    /// domain.
    fn sample_candidate(&self, sigma: f64, rng: &mut SmallRng) -> Result<Position, SimError> {
        let dx = Normal::new(self.position.x, sigma)?;
        let dy = Normal::new(self.position.y, sigma)?;

        for _ in 0..MAX_REJECTION_DRAWS {
            let candidate =
                Position::rounded(dx.sample(rng), dy.sample(rng), self.granularity);
            if candidate.strictly_inside() {
                return Ok(candidate);
            }
        }
        Err(SimError::SamplingExhausted {
            what: "movement candidate",
            attempts: MAX_REJECTION_DRAWS,
        })
    }

    /// Mark a susceptible agent as infected. Used for the exposure roll and
    /// for seeding the index case; recovered agents stay immune.
    pub fn infect(&mut self) {
        if self.state == HealthState::Susceptible {
            self.state = if self.asymptomatic_duration > 0.0 {
                HealthState::Incubating {
                    remaining: self.asymptomatic_duration,
                }
            } else {
                HealthState::Symptomatic {
                    remaining: self.infection_duration,
                }
            };
        }
    }

    /// Move the agent directly, for scenario setup. The position must lie
    /// in the unit square.
    pub fn set_position(&mut self, position: Position) -> Result<(), SimError> {
        if !position.in_unit_square() {
            return Err(SimError::InvalidConfig(format!(
                "position ({}, {}) outside the unit square",
                position.x, position.y
            )));
        }
        self.position = Position::rounded(position.x, position.y, self.granularity);
        Ok(())
    }

    /// Override the cleaning effectiveness, for scenario setup.
    pub fn set_cleanliness(&mut self, cleanliness: f64) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&cleanliness) {
            return Err(SimError::InvalidConfig(format!(
                "cleanliness must be in [0, 1], got {cleanliness}"
            )));
        }
        self.cleanliness = cleanliness;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: HealthState) {
        self.state = state;
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> HealthState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state != HealthState::Dead
    }

    /// Whether the agent currently carries (and sheds) the infection.
    pub fn is_infected(&self) -> bool {
        matches!(
            self.state,
            HealthState::Incubating { .. } | HealthState::Symptomatic { .. }
        )
    }

    /// Whether the agent is in the symptomatic phase of the illness.
    pub fn is_symptomatic(&self) -> bool {
        matches!(self.state, HealthState::Symptomatic { .. })
    }

    /// Whether the agent has ever been infected.
    pub fn was_ever_infected(&self) -> bool {
        self.state != HealthState::Susceptible
    }

    pub fn preexisting_condition(&self) -> bool {
        self.preexisting_condition
    }

    /// Total illness length in days, fixed at construction.
    pub fn infection_duration(&self) -> u32 {
        self.infection_duration
    }

    /// Sampled pre-symptomatic period in days, fixed at construction.
    pub fn asymptomatic_duration(&self) -> f64 {
        self.asymptomatic_duration
    }

    pub fn cleanliness(&self) -> f64 {
        self.cleanliness
    }

    /// Current travel energy, halved while symptomatic.
    pub fn travel_energy(&self) -> f64 {
        self.travel_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::environment::Environment;
    use rand::SeedableRng;

    fn demographics() -> DemographicsConfig {
        DemographicsConfig::default()
    }

    fn agent(profile: AgentProfile, seed: u64) -> Agent {
        let mut rng = SmallRng::seed_from_u64(seed);
        Agent::new(&profile, &demographics(), &mut rng).unwrap()
    }

    fn saturated_environment() -> Environment {
        let mut landscape = Environment::new(2, 0.4, 5).unwrap();
        for i in 0..landscape.dim() {
            for j in 0..landscape.dim() {
                landscape.set_load(i, j, 1.0);
            }
        }
        landscape
    }

    #[test]
    fn test_construction_samples_valid_profile() {
        let agent = agent(AgentProfile::default(), 12345);

        assert!((0.0..=104.0).contains(&agent.age()));
        assert!(agent.position().in_unit_square());
        assert!(agent.is_alive());
        assert!(!agent.is_infected());
        assert!(agent.infection_duration() == 14 || agent.infection_duration() == 28);
        assert!(agent.asymptomatic_duration() >= 0.0);
    }

    #[test]
    fn test_construction_rejects_bad_biases() {
        let mut rng = SmallRng::seed_from_u64(1);
        let demographics = demographics();

        let profile = AgentProfile::new().with_cleanliness(1.2);
        assert!(Agent::new(&profile, &demographics, &mut rng).is_err());

        let profile = AgentProfile::new().with_social_distance(-0.1);
        assert!(Agent::new(&profile, &demographics, &mut rng).is_err());

        let profile = AgentProfile::new().with_travel_energy(f64::NAN);
        assert!(Agent::new(&profile, &demographics, &mut rng).is_err());

        let profile = AgentProfile::new().with_granularity(0);
        assert!(Agent::new(&profile, &demographics, &mut rng).is_err());

        let profile =
            AgentProfile::new().with_initial_location(Position::new(1.2, 0.5));
        assert!(Agent::new(&profile, &demographics, &mut rng).is_err());
    }

    #[test]
    fn test_biased_initial_location_lands_nearby() {
        for seed in 0..50 {
            let profile = AgentProfile::new()
                .with_initial_location(Position::new(0.5, 0.5));
            let agent = agent(profile, seed);
            let p = agent.position();
            assert!(p.in_unit_square());
            // Scatter is one cell (0.01); ten cells is far outside the tail.
            assert!((p.x - 0.5).abs() < 0.1 && (p.y - 0.5).abs() < 0.1);
        }
    }

    #[test]
    fn test_saturated_cell_always_infects() {
        let landscape = saturated_environment();
        let mut agent = agent(AgentProfile::default(), 7);
        let mut rng = SmallRng::seed_from_u64(8);

        agent
            .update(&landscape, &Peers::new(&[], &[]), &demographics(), &mut rng)
            .unwrap();
        // Uniform draws are < 1, so a load of 1.0 infects with certainty.
        assert!(agent.is_infected());
        assert!(matches!(agent.state(), HealthState::Incubating { .. }));
    }

    #[test]
    fn test_recovered_agent_is_never_reinfected() {
        let landscape = saturated_environment();
        let mut agent = agent(AgentProfile::default(), 9);
        agent.state = HealthState::Recovered;
        let mut rng = SmallRng::seed_from_u64(10);

        for _ in 0..50 {
            agent
                .update(&landscape, &Peers::new(&[], &[]), &demographics(), &mut rng)
                .unwrap();
            assert_eq!(agent.state(), HealthState::Recovered);
        }

        // The explicit seeding hook must not break immunity either.
        agent.infect();
        assert_eq!(agent.state(), HealthState::Recovered);
    }

    #[test]
    fn test_dead_agent_is_inert() {
        let landscape = saturated_environment();
        let mut agent = agent(AgentProfile::default(), 11);
        agent.state = HealthState::Dead;
        let before = agent.position();
        let mut rng = SmallRng::seed_from_u64(12);

        for _ in 0..20 {
            agent
                .update(&landscape, &Peers::new(&[], &[]), &demographics(), &mut rng)
                .unwrap();
            assert_eq!(agent.position(), before);
            assert_eq!(agent.state(), HealthState::Dead);
        }
    }

    #[test]
    fn test_incubation_counts_down_to_symptoms() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let mut agent = agent(AgentProfile::default(), 13);
        agent.asymptomatic_duration = 2.5;
        agent.infect();
        assert_eq!(agent.state(), HealthState::Incubating { remaining: 2.5 });

        let mut rng = SmallRng::seed_from_u64(14);
        let demographics = demographics();
        let peers = Peers::new(&[], &[]);

        agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
        assert_eq!(agent.state(), HealthState::Incubating { remaining: 1.5 });
        assert_eq!(agent.travel_energy(), agent.travel_energy_base);

        agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
        assert_eq!(agent.state(), HealthState::Incubating { remaining: 0.5 });

        agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
        assert!(agent.is_symptomatic());
    }

    #[test]
    fn test_symptomatic_phase_slows_travel_and_recovers() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let demographics = demographics();
        let peers = Peers::new(&[], &[]);

        // A young agent: daily survival is (1 - 0.002)^(1/14), so death over
        // the illness is a ~0.2% event; retry seeds until the agent survives.
        'seed: for seed in 0..20u64 {
            let mut agent = agent(AgentProfile::new().with_travel_energy(2.0), seed);
            agent.age = 20.0;
            agent.preexisting_condition = false;
            agent.infection_duration = 14;
            agent.state = HealthState::Symptomatic { remaining: 14 };

            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(100));
            for day in 1..=14u32 {
                agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
                if agent.state() == HealthState::Dead {
                    continue 'seed;
                }
                if day < 14 {
                    assert_eq!(
                        agent.state(),
                        HealthState::Symptomatic { remaining: 14 - day }
                    );
                    assert_eq!(agent.travel_energy(), 1.0);
                }
            }

            assert_eq!(agent.state(), HealthState::Recovered);
            assert_eq!(agent.travel_energy(), 2.0);
            return;
        }
        panic!("every seed died during a 0.2% mortality illness");
    }

    #[test]
    fn test_maximal_mortality_kills_quickly() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let mut demographics = demographics();
        demographics.mortality.default_rate = 1.0;
        let peers = Peers::new(&[], &[]);

        let mut agent = agent(AgentProfile::default(), 15);
        agent.age = 90.0;
        agent.state = HealthState::Symptomatic { remaining: 28 };
        agent.infection_duration = 28;

        let mut rng = SmallRng::seed_from_u64(16);
        agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
        // Aggregate rate 1.0 means the daily survival factor is 0.
        assert_eq!(agent.state(), HealthState::Dead);
    }

    #[test]
    fn test_movement_stays_on_grid_and_in_bounds() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let demographics = demographics();
        let peers = Peers::new(&[], &[]);
        let mut agent = agent(AgentProfile::new().with_travel_energy(3.5), 17);
        let mut rng = SmallRng::seed_from_u64(18);

        for _ in 0..200 {
            agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
            let p = agent.position();
            assert!(p.strictly_inside());
            // Grid-aligned to two decimals.
            let scaled = p.x * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distancing_movement_works_with_few_peers() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let demographics = demographics();
        // Full social distancing, and fewer than ten peers available.
        let mut agent = agent(AgentProfile::new().with_social_distance(1.0), 19);
        let others = vec![
            agent2(Position::new(0.4, 0.4)),
            agent2(Position::new(0.6, 0.6)),
        ];
        let peers = Peers::new(&others, &[]);
        let mut rng = SmallRng::seed_from_u64(20);

        for _ in 0..50 {
            agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
            assert!(agent.position().strictly_inside());
        }
    }

    #[test]
    fn test_distancing_movement_with_no_peers_falls_back() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let demographics = demographics();
        let mut agent = agent(AgentProfile::new().with_social_distance(1.0), 21);
        let peers = Peers::new(&[], &[]);
        let mut rng = SmallRng::seed_from_u64(22);

        // Degenerate density estimate: every candidate ties, first wins.
        agent.update(&landscape, &peers, &demographics, &mut rng).unwrap();
        assert!(agent.position().strictly_inside());
    }

    #[test]
    fn test_zero_travel_energy_on_boundary_reports_exhaustion() {
        let landscape = Environment::new(2, 0.4, 5).unwrap();
        let demographics = demographics();
        let mut agent = agent(AgentProfile::new().with_travel_energy(0.0), 23);
        agent.set_position(Position::new(0.0, 0.5)).unwrap();
        let peers = Peers::new(&[], &[]);
        let mut rng = SmallRng::seed_from_u64(24);

        // Zero spread pins every candidate to the boundary position, which
        // can never be strictly inside.
        let result = agent.update(&landscape, &peers, &demographics, &mut rng);
        assert!(matches!(
            result,
            Err(SimError::SamplingExhausted { what: "movement candidate", .. })
        ));
    }

    fn agent2(position: Position) -> Agent {
        let mut rng = SmallRng::seed_from_u64(999);
        let mut agent =
            Agent::new(&AgentProfile::default(), &DemographicsConfig::default(), &mut rng)
                .unwrap();
        agent.set_position(position).unwrap();
        agent
    }
}
