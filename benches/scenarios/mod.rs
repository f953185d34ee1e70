//! End-to-end scenario benchmarks.
//!
//! These use the shipped parameter table at reduced sample rates.

mod cycle;

pub use cycle::bench_cycle;
