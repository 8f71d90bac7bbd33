use core::fmt::{Debug, Display};
use num_traits::Float;

/// Trait for real-valued quaternion components.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`. Equality on a `FloatScalar` is the
/// IEEE rule: exact, with `-0.0 == 0.0` and `NaN != NaN`.
pub trait FloatScalar: Copy + PartialEq + Debug + Display + Float {}

impl<T: Copy + PartialEq + Debug + Display + Float> FloatScalar for T {}
