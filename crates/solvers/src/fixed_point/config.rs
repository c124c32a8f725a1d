use thiserror::Error;

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a fixed-point solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least one")]
    MaxIters,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or the tolerance is negative
    /// or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of model calls.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual at or below which the iteration has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
