//! # causeway-engine
//!
//! Trace-based causal model engine. A model declares one node per statement
//! through a [`Run`]; the nodes read while computing each declaration become
//! its parents. From one run the engine yields vectorized samples, the
//! recovered DAG, do-interventions and private-node gating, and grades
//! guessed edge lists against the recovered graph.

pub mod distributions;
pub mod grading;
pub mod graph;
pub mod interventions;
pub mod model;
pub mod render;
pub mod run;
pub mod samples;
pub mod system;
pub mod table;
pub mod visibility;

pub use distributions::Distributions;
pub use grading::{EdgeGuess, GradeReport, GradingMode, GroundTruth};
pub use graph::{CausalGraph, Edge};
pub use interventions::{Intervention, Interventions};
pub use model::CausalModel;
pub use run::{Run, RunOutput, Scope};
pub use samples::Samples;
pub use system::CausalSystem;
pub use table::SampleTable;
pub use visibility::Visibility;
