/// Errors from the checked quaternion operations.
///
/// The plain operators never fail; division by the zero quaternion follows
/// IEEE semantics and yields non-finite components. Only the opt-in
/// `try_inverse` and `checked_div` report this error.
///
/// ```
/// use hamiltonian::{Quaternion, QuaternionError};
///
/// let zero = Quaternion::<f64>::default();
/// assert_eq!(zero.try_inverse().unwrap_err(), QuaternionError::ZeroNorm);
///
/// let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(q.checked_div(zero), Err(QuaternionError::ZeroNorm));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// The quaternion's squared norm evaluated to zero.
    ///
    /// This includes non-zero quaternions whose squared norm underflows,
    /// e.g. `(1e-200, 0, 0, 0)` in `f64`: their components are not all
    /// zero, but `1e-400` is not representable, so no finite inverse
    /// can be formed from the computed norm.
    ZeroNorm,
}

impl core::fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuaternionError::ZeroNorm => write!(f, "quaternion has zero norm"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuaternionError {}
