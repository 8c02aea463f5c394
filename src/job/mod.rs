//! Video job pipeline orchestration.
//!
//! This module implements the job state machine, the durable job store
//! contract, and the stage-provider ports the pipeline engine delegates
//! to. A job is created once with its resolved topic and synthesized
//! script, then driven through video generation, narration generation,
//! and publishing, with every stage transition persisted and logged. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
