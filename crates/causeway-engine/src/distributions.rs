//! Pre-made distributions for model authors.
//!
//! Implemented for both [`Run`](crate::run::Run) (root nodes) and
//! [`Scope`](crate::run::Scope) (noise terms inside a derived node). Every
//! draw has the run's sample count and comes from the run's RNG.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use statrs::distribution::{Beta, Categorical, Normal};

use causeway_core::errors::{ModelError, ModelResult};

use crate::samples::Samples;

fn invalid(distribution: &'static str, reason: impl Into<String>) -> ModelError {
    ModelError::InvalidDistribution {
        distribution,
        reason: reason.into(),
    }
}

pub trait Distributions {
    fn sample_count(&self) -> usize;

    fn rng(&mut self) -> &mut StdRng;

    /// Gaussian with mean `mu` and standard deviation `std`. A zero `std`
    /// yields the constant `mu`.
    fn normal(&mut self, mu: f64, std: f64) -> ModelResult<Samples> {
        if !mu.is_finite() || !std.is_finite() || std < 0.0 {
            return Err(invalid(
                "normal",
                format!("mu={mu}, std={std}; need finite mu and std >= 0"),
            ));
        }
        let standard = Normal::new(0.0, 1.0).map_err(|e| invalid("normal", e.to_string()))?;
        let n = self.sample_count();
        Ok(standard
            .sample_iter(self.rng())
            .take(n)
            .map(|z| mu + std * z)
            .collect())
    }

    /// Category indices `0..k` as floats, drawn with the given (unnormalized)
    /// weights.
    fn categorical(&mut self, probabilities: &[f64]) -> ModelResult<Samples> {
        if probabilities.is_empty() {
            return Err(invalid("categorical", "no categories"));
        }
        if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(invalid(
                "categorical",
                format!("weights must be finite and non-negative, got {probabilities:?}"),
            ));
        }
        let total: f64 = probabilities.iter().sum();
        if total <= 0.0 {
            return Err(invalid("categorical", "weights sum to zero"));
        }
        let normalized: Vec<f64> = probabilities.iter().map(|p| p / total).collect();
        let categorical =
            Categorical::new(&normalized).map_err(|e| invalid("categorical", e.to_string()))?;
        let n = self.sample_count();
        Ok(Distribution::<f64>::sample_iter(categorical, self.rng())
            .take(n)
            .collect())
    }

    /// 1.0 with probability `p_success`, else 0.0.
    fn binary(&mut self, p_success: f64) -> ModelResult<Samples> {
        if !(0.0..=1.0).contains(&p_success) {
            return Err(invalid(
                "binary",
                format!("p_success={p_success} outside [0, 1]"),
            ));
        }
        self.categorical(&[1.0 - p_success, p_success])
    }

    fn beta(&mut self, a: f64, b: f64) -> ModelResult<Samples> {
        let beta = Beta::new(a, b).map_err(|e| invalid("beta", e.to_string()))?;
        let n = self.sample_count();
        Ok(beta.sample_iter(self.rng()).take(n).collect())
    }

    /// Uniform on `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> ModelResult<Samples> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(invalid(
                "uniform",
                format!("need finite low < high, got [{low}, {high})"),
            ));
        }
        let uniform = Uniform::new(low, high);
        let n = self.sample_count();
        Ok(uniform.sample_iter(self.rng()).take(n).collect())
    }
}
