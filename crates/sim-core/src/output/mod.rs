//! Reporting: per-day population counts and end-of-run summaries.

pub mod stats;

pub use stats::{
    census, demographics_summary, write_stats, DailyCounts, DemographicsSummary,
    SimulationReport, StatsCollector, SummaryStats,
};
