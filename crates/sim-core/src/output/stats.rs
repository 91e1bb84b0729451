//! Statistics output.
//!
//! Collects per-day population counts during a run and writes a JSON report
//! for analysis. Everything here reads only the public agent state; nothing
//! feeds back into the simulation.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::components::agent::Agent;

/// Statistics file name inside the output directory.
pub const STATS_FILE_NAME: &str = "stats.json";

/// Population counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCounts {
    pub day: u64,
    /// Alive and not currently infected (includes the recovered).
    pub healthy: usize,
    /// Alive and carrying the infection.
    pub infected: usize,
    /// Subset of the infected who are past the pre-symptomatic phase.
    pub symptomatic: usize,
    /// Recovered with immunity.
    pub recovered: usize,
    pub dead: usize,
}

/// Count the population's health states for one day.
pub fn census(day: u64, population: &[Agent]) -> DailyCounts {
    let mut counts = DailyCounts {
        day,
        healthy: 0,
        infected: 0,
        symptomatic: 0,
        recovered: 0,
        dead: 0,
    };

    for agent in population {
        if !agent.is_alive() {
            counts.dead += 1;
        } else if agent.is_infected() {
            counts.infected += 1;
            if agent.is_symptomatic() {
                counts.symptomatic += 1;
            }
        } else {
            counts.healthy += 1;
            if agent.was_ever_infected() {
                counts.recovered += 1;
            }
        }
    }

    counts
}

/// Accumulates per-day counts over a run.
#[derive(Debug, Default)]
pub struct StatsCollector {
    history: Vec<DailyCounts>,
    peak_infected: usize,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one day's counts.
    pub fn record(&mut self, counts: DailyCounts) {
        if counts.infected > self.peak_infected {
            self.peak_infected = counts.infected;
        }
        self.history.push(counts);
    }

    pub fn history(&self) -> &[DailyCounts] {
        &self.history
    }

    /// Highest concurrent infection count seen so far.
    pub fn peak_infected(&self) -> usize {
        self.peak_infected
    }

    pub fn last(&self) -> Option<&DailyCounts> {
        self.history.last()
    }

    /// Build the end-of-run summary against the final population.
    pub fn summary(&self, population: &[Agent]) -> SummaryStats {
        let ever_infected = population.iter().filter(|a| a.was_ever_infected()).count();
        let dead = population.iter().filter(|a| !a.is_alive()).count();
        let death_rate = if ever_infected > 0 {
            dead as f64 / ever_infected as f64
        } else {
            0.0
        };

        SummaryStats {
            days_run: self.history.last().map(|c| c.day).unwrap_or(0),
            population: population.len(),
            peak_infected: self.peak_infected,
            ever_infected,
            dead,
            death_rate,
        }
    }
}

/// End-of-run outcome summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub days_run: u64,
    pub population: usize,
    /// Highest concurrent infection count.
    pub peak_infected: usize,
    /// Agents that carried the infection at any point.
    pub ever_infected: usize,
    pub dead: usize,
    /// Deaths per ever-infected agent.
    pub death_rate: f64,
}

/// Static population make-up, computed at spawn time.
#[derive(Debug, Clone, Serialize)]
pub struct DemographicsSummary {
    /// Agent counts per decade of age (0-9 through 100+).
    pub age_decades: Vec<usize>,
    /// Share of agents with a pre-existing condition.
    pub preexisting_share: f64,
    /// Share of agents that would face the long illness.
    pub long_illness_share: f64,
}

/// Summarize the population's sampled ages and risk attributes.
pub fn demographics_summary(population: &[Agent]) -> DemographicsSummary {
    let mut age_decades = vec![0usize; 11];
    for agent in population {
        let decade = ((agent.age() / 10.0) as usize).min(age_decades.len() - 1);
        age_decades[decade] += 1;
    }

    let total = population.len().max(1) as f64;
    let preexisting = population
        .iter()
        .filter(|a| a.preexisting_condition())
        .count();
    let long_illness = population
        .iter()
        .filter(|a| a.infection_duration() > 14)
        .count();

    DemographicsSummary {
        age_decades,
        preexisting_share: preexisting as f64 / total,
        long_illness_share: long_illness as f64 / total,
    }
}

/// Full report written at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub summary: SummaryStats,
    pub demographics: DemographicsSummary,
    pub history: Vec<DailyCounts>,
}

/// Write the report as pretty JSON under `dir`, creating the directory if
/// needed. Returns the path of the written file.
pub fn write_stats(dir: &Path, report: &SimulationReport) -> std::io::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let path = dir.join(STATS_FILE_NAME);
    fs::write(&path, json)?;
    Ok(path)
}
