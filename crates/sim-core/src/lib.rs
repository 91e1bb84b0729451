//! Agent-based epidemic simulation kernel.
//!
//! A population of mobile agents moves across the continuous unit square,
//! depositing into and cleaning a decaying viral-load field, and progressing
//! through an age- and condition-dependent health state machine
//! (susceptible, incubating, symptomatic, recovered, dead). The field is the
//! only transmission channel; one seeded RNG and a fixed update order make
//! whole runs bit-for-bit reproducible.

pub mod components;
pub mod config;
pub mod demographics;
pub mod error;
pub mod output;
pub mod setup;
pub mod spatial;
pub mod tick;

pub use components::{Agent, AgentProfile, Environment, HealthState, Peers};
pub use config::SimulationConfig;
pub use error::SimError;
pub use spatial::Position;
pub use tick::advance_day;
