pub mod fixed_point;
pub mod iteration;

pub use fixed_point::FixedPointProblem;
pub use iteration::IterationProblem;
