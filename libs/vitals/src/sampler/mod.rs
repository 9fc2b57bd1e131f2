//! Metric samplers
//!
//! Three independent samplers, each a pure function of current system
//! state to a reading. They share no state and run strictly sequentially;
//! the CPU sampler contains the run's only blocking operation (its
//! interval sleep).
//!
//! None of them propagate source errors: an unreadable or degenerate
//! source becomes `UtilizationReading::unavailable()`.

pub mod cpu;
pub mod disk;
pub mod memory;
