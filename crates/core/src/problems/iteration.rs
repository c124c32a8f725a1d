/// Defines a discrete iteration problem: `x_{n+1} = g(x_n)`.
///
/// The model evaluates `g` and the problem decides how the next model input
/// is built from the current input and output. Many discrete-time models
/// return their next state directly, in which case [`next_input`] is a clone
/// of the output.
///
/// [`next_input`]: IterationProblem::next_input
pub trait IterationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for the next step.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the next input cannot be constructed.
    fn next_input(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<Self::Input, Self::Error>;
}
