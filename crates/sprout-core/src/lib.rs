//! sprout-core
//!
//! Pure domain types: screening questions, answers, recommendation rules,
//! and the stored screening record. No I/O and no scoring logic — this is
//! the shared vocabulary of the Sprout system.

pub mod error;
pub mod models;
