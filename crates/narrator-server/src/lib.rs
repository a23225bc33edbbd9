//! Narrator server library surface
//!
//! Split out of the binary so integration tests can build the router with a
//! stubbed speech provider.

pub mod api;
pub mod error;
pub mod state;
