//! Adapters - infrastructure implementations of the ports.

pub mod memory;
