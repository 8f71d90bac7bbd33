mod ops;

use crate::error::QuaternionError;
use crate::traits::FloatScalar;

/// Quaternion number `real + imaginary_x·i + imaginary_y·j + imaginary_z·k`.
///
/// A plain `Copy` value: the four components are its whole state, and
/// equality is exact component-wise comparison (`-0.0 == 0.0`, no epsilon).
/// A bare scalar `s` behaves as `(s, 0, 0, 0)` in every mixed operator.
///
/// # Examples
///
/// ```
/// use hamiltonian::Quaternion;
///
/// let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
/// let b = Quaternion::new(0.5, -1.0, 0.0, 2.0);
///
/// // Hamilton product is not commutative
/// assert_ne!(a * b, b * a);
///
/// // Scalars mix in on either side
/// assert_eq!(a * 2.0, 2.0 * a);
/// assert_eq!(a / a, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub real: T,
    pub imaginary_x: T,
    pub imaginary_y: T,
    pub imaginary_z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T> Quaternion<T> {
    /// Create a quaternion from its real part and the `i`, `j`, `k` parts.
    #[inline]
    pub const fn new(real: T, imaginary_x: T, imaginary_y: T, imaginary_z: T) -> Self {
        Self {
            real,
            imaginary_x,
            imaginary_y,
            imaginary_z,
        }
    }

    /// Create from `[real, i, j, k]`.
    #[inline]
    pub fn from_array([real, imaginary_x, imaginary_y, imaginary_z]: [T; 4]) -> Self {
        Self::new(real, imaginary_x, imaginary_y, imaginary_z)
    }

    /// Components as `[real, i, j, k]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.real, self.imaginary_x, self.imaginary_y, self.imaginary_z]
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Promote a real scalar: `(value, 0, 0, 0)`.
    #[inline]
    pub fn from_scalar(value: T) -> Self {
        Self::new(value, T::zero(), T::zero(), T::zero())
    }

    /// Pure imaginary `(0, value, 0, 0)`.
    #[inline]
    pub fn i(value: T) -> Self {
        Self::new(T::zero(), value, T::zero(), T::zero())
    }

    /// Pure imaginary `(0, 0, value, 0)`.
    #[inline]
    pub fn j(value: T) -> Self {
        Self::new(T::zero(), T::zero(), value, T::zero())
    }

    /// Pure imaginary `(0, 0, 0, value)`.
    #[inline]
    pub fn k(value: T) -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), value)
    }

    /// Overwrite `self` with `other` and hand back the same handle.
    ///
    /// ```
    /// use hamiltonian::Quaternion;
    ///
    /// let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    /// q.assign(Quaternion::from_scalar(5.0)).increment();
    /// assert_eq!(q, 6.0);
    /// ```
    #[inline]
    pub fn assign(&mut self, other: Self) -> &mut Self {
        *self = other;
        self
    }

    /// True when all three imaginary components are zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.imaginary_x == T::zero()
            && self.imaginary_y == T::zero()
            && self.imaginary_z == T::zero()
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: FloatScalar> From<T> for Quaternion<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_scalar(value)
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(components: [T; 4]) -> Self {
        Self::from_array(components)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        q.to_array()
    }
}

// ── Sign, conjugate, norm ────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Unary plus: an independent copy of `self`.
    #[inline]
    pub fn plus(&self) -> Self {
        *self
    }

    /// Conjugate: `(r, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real,
            imaginary_x: -self.imaginary_x,
            imaginary_y: -self.imaginary_y,
            imaginary_z: -self.imaginary_z,
        }
    }

    /// Squared norm: `r² + x² + y² + z²`.
    ///
    /// No square root is taken.
    #[inline]
    pub fn norm(&self) -> T {
        self.real * self.real
            + self.imaginary_x * self.imaginary_x
            + self.imaginary_y * self.imaginary_y
            + self.imaginary_z * self.imaginary_z
    }

    /// Inverse: `conjugate / norm`.
    ///
    /// Unguarded: the zero quaternion yields non-finite components.
    #[inline]
    pub fn inverse(&self) -> Self {
        let n = self.norm();
        Self {
            real: self.real / n,
            imaginary_x: -self.imaginary_x / n,
            imaginary_y: -self.imaginary_y / n,
            imaginary_z: -self.imaginary_z / n,
        }
    }

    /// Inverse, or [`QuaternionError::ZeroNorm`] when the computed norm is
    /// zero (the zero quaternion, or one whose squared norm underflows).
    pub fn try_inverse(&self) -> Result<Self, QuaternionError> {
        if self.norm() == T::zero() {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self.inverse())
    }
}

// ── Increment / decrement ────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Prefix increment: add one to the real part in place.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.real = self.real + T::one();
        self
    }

    /// Prefix decrement: subtract one from the real part in place.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.real = self.real - T::one();
        self
    }

    /// Postfix increment: returns the value from before the change.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        self.increment();
        before
    }

    /// Postfix decrement: returns the value from before the change.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        self.decrement();
        before
    }
}

// ── Display ──────────────────────────────────────────────────────────

fn write_component<T: core::fmt::Display>(
    f: &mut core::fmt::Formatter<'_>,
    value: T,
) -> core::fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, value),
        None => write!(f, "{}", value),
    }
}

/// Renders `r + xi + yj + zk`, with each imaginary sign pulled out in
/// front of its magnitude. A formatter precision applies to every part.
impl<T: FloatScalar> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_component(f, self.real)?;
        for (value, unit) in [
            (self.imaginary_x, 'i'),
            (self.imaginary_y, 'j'),
            (self.imaginary_z, 'k'),
        ] {
            f.write_str(if value >= T::zero() { " + " } else { " - " })?;
            write_component(f, value.abs())?;
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
