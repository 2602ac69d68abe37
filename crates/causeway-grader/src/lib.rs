//! # causeway-grader
//!
//! The grading desk: turns free-form query subjects into engine calls,
//! keeps per-sender tallies and computes competition scores. Mail transport
//! and persistence belong to the caller.

pub mod desk;
pub mod query;
pub mod tally;

pub use desk::{GradingDesk, Outcome, Reply, USAGE};
pub use query::{GuessQuery, Query, SampleQuery};
pub use tally::{Completion, UserTally};
