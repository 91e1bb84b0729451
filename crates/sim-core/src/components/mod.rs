//! Core simulation entities: agents and the viral-load environment.

pub mod agent;
pub mod environment;

pub use agent::{Agent, AgentProfile, HealthState, Peers};
pub use environment::Environment;
