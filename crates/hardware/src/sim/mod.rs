//! Simulation utilities.
//!
//! Provides the synthetic access-pattern generators and the simulator that
//! drives prefetchers over them.

pub mod patterns;
pub mod simulator;

pub use simulator::Simulator;
