//! The model-author seam.

use causeway_core::errors::ModelResult;

use crate::run::Run;

/// A causal generative model written as straight-line code.
///
/// `define` declares one node per statement through the [`Run`]. Root nodes
/// use [`Run::define`]; nodes computed from others use
/// [`Run::define_with`], whose scope is the only way to read declared
/// values, so every dependency becomes an edge.
///
/// Arithmetic on [`Samples`](crate::Samples) panics when two operands have
/// different lengths and neither has length 1. A model that may combine
/// vectors of unrelated lengths should use
/// [`Samples::try_zip_with`](crate::Samples::try_zip_with) and return a
/// [`ModelError`](causeway_core::errors::ModelError) instead.
///
/// ```ignore
/// fn define(&self, run: &mut Run) -> ModelResult<()> {
///     let x = run.normal(2.0, 3.0)?;
///     run.define("X", x)?;
///     run.define_with("Y", |s| Ok(s.read("X")? * 2.0 + s.normal(0.0, 1.0)?))
/// }
/// ```
pub trait CausalModel: Send + Sync {
    /// Declare every node of the model for one run.
    fn define(&self, run: &mut Run) -> ModelResult<()>;

    /// Shared secret that unlocks private nodes in sampled tables.
    fn secret(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> CausalModel for F
where
    F: Fn(&mut Run) -> ModelResult<()> + Send + Sync,
{
    fn define(&self, run: &mut Run) -> ModelResult<()> {
        self(run)
    }
}
