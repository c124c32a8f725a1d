use super::IterationProblem;

/// Defines a fixed-point problem to be solved by repeated iteration.
///
/// A fixed-point problem is an [`IterationProblem`] with a residual that
/// measures how far one model call moved the iterate. Solvers keep stepping
/// until the residual falls within tolerance.
pub trait FixedPointProblem: IterationProblem {
    /// Computes the change produced by a single model call.
    ///
    /// The value is compared against the solver's residual tolerance, so it
    /// should be non-negative and zero exactly at a fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`IterationProblem::Error`] if the residual cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Feeds each output back as the next input.
    struct Feedback;

    impl IterationProblem for Feedback {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn next_input(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
            Ok(*output)
        }
    }

    impl FixedPointProblem for Feedback {
        fn residual(&self, input: &f64, output: &f64) -> Result<f64, Infallible> {
            Ok((output - input).abs())
        }
    }

    #[test]
    fn residual_is_zero_at_fixed_point() {
        let residual = Feedback.residual(&2.0, &2.0).unwrap();
        assert!(residual.abs() < f64::EPSILON);
    }

    #[test]
    fn residual_measures_step_size() {
        let residual = Feedback.residual(&1.0, &0.25).unwrap();
        assert!((residual - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn next_input_passes_output_through() {
        let next = Feedback.next_input(&0.0, &1.0).unwrap();
        assert!((next - 1.0).abs() < f64::EPSILON);
    }
}
