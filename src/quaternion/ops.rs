use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::Quaternion;
use crate::error::QuaternionError;
use crate::traits::FloatScalar;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            real: self.real + rhs.real,
            imaginary_x: self.imaginary_x + rhs.imaginary_x,
            imaginary_y: self.imaginary_y + rhs.imaginary_y,
            imaginary_z: self.imaginary_z + rhs.imaginary_z,
        }
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            real: self.real - rhs.real,
            imaginary_x: self.imaginary_x - rhs.imaginary_x,
            imaginary_y: self.imaginary_y - rhs.imaginary_y,
            imaginary_z: self.imaginary_z - rhs.imaginary_z,
        }
    }
}

// ── Hamilton product ────────────────────────────────────────────────

impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (r1, x1, y1, z1) = (self.real, self.imaginary_x, self.imaginary_y, self.imaginary_z);
        let (r2, x2, y2, z2) = (rhs.real, rhs.imaginary_x, rhs.imaginary_y, rhs.imaginary_z);
        Self {
            real: r1 * r2 - x1 * x2 - y1 * y2 - z1 * z2,
            imaginary_x: r1 * x2 + x1 * r2 + y1 * z2 - z1 * y2,
            imaginary_y: r1 * y2 - x1 * z2 + y1 * r2 + z1 * x2,
            imaginary_z: r1 * z2 + x1 * y2 - y1 * x2 + z1 * r2,
        }
    }
}

// ── Division: lhs * rhs⁻¹ ───────────────────────────────────────────
// Each component is divided by the norm rather than scaled by its
// reciprocal, so exactly representable quotients stay exact. The real
// numerator sums in the same order as `norm`, and each imaginary numerator
// pairs the terms that cancel when lhs == rhs, so `q / q` is exactly one.

impl<T: FloatScalar> Div for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let (r1, x1, y1, z1) = (self.real, self.imaginary_x, self.imaginary_y, self.imaginary_z);
        let (r2, x2, y2, z2) = (rhs.real, rhs.imaginary_x, rhs.imaginary_y, rhs.imaginary_z);
        let n = rhs.norm();
        Self {
            real: (r1 * r2 + x1 * x2 + y1 * y2 + z1 * z2) / n,
            imaginary_x: ((x1 * r2 - r1 * x2) + (z1 * y2 - y1 * z2)) / n,
            imaginary_y: ((y1 * r2 - r1 * y2) + (x1 * z2 - z1 * x2)) / n,
            imaginary_z: ((z1 * r2 - r1 * z2) + (y1 * x2 - x1 * y2)) / n,
        }
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// `self / rhs`, or [`QuaternionError::ZeroNorm`] when the norm of `rhs`
    /// computes to zero, including underflow.
    pub fn checked_div(self, rhs: Self) -> Result<Self, QuaternionError> {
        if rhs.norm() == T::zero() {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self / rhs)
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imaginary_x: -self.imaginary_x,
            imaginary_y: -self.imaginary_y,
            imaginary_z: -self.imaginary_z,
        }
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Quaternion is Copy, so &Quaternion ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: FloatScalar> $Op<Quaternion<T>> for &Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: Quaternion<T>) -> Quaternion<T> {
                (*self).$method(rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                self.$method(*rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for &Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);
forward_ref_binop!(Div, div);

// ── quaternion ⊕ scalar ─────────────────────────────────────────────
// The scalar is promoted to (s, 0, 0, 0) and goes through the full
// quaternion formula.

macro_rules! impl_scalar_rhs {
    ($Op:ident, $method:ident) => {
        impl<T: FloatScalar> $Op<T> for Quaternion<T> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.$method(Self::from_scalar(rhs))
            }
        }

        impl<T: FloatScalar> $Op<T> for &Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: T) -> Quaternion<T> {
                (*self).$method(Quaternion::from_scalar(rhs))
            }
        }
    };
}

impl_scalar_rhs!(Add, add);
impl_scalar_rhs!(Sub, sub);
impl_scalar_rhs!(Mul, mul);
impl_scalar_rhs!(Div, div);

impl<T: FloatScalar> PartialEq<T> for Quaternion<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        *self == Self::from_scalar(*other)
    }
}

// ── scalar ⊕ quaternion (concrete impls to avoid orphan rules) ──────

macro_rules! impl_scalar_lhs {
    (@op $t:ty, $Op:ident, $method:ident) => {
        impl $Op<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;
            #[inline]
            fn $method(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                Quaternion::from_scalar(self).$method(rhs)
            }
        }

        impl $Op<&Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;
            #[inline]
            fn $method(self, rhs: &Quaternion<$t>) -> Quaternion<$t> {
                Quaternion::from_scalar(self).$method(*rhs)
            }
        }
    };
    ($($t:ty),*) => {
        $(
            impl_scalar_lhs!(@op $t, Add, add);
            impl_scalar_lhs!(@op $t, Sub, sub);
            impl_scalar_lhs!(@op $t, Mul, mul);
            impl_scalar_lhs!(@op $t, Div, div);

            impl PartialEq<Quaternion<$t>> for $t {
                #[inline]
                fn eq(&self, other: &Quaternion<$t>) -> bool {
                    Quaternion::from_scalar(*self) == *other
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

// ── Compound assignment ─────────────────────────────────────────────
// The full result is computed before `self` is overwritten.

macro_rules! impl_op_assign {
    ($OpAssign:ident, $op_assign:ident, $Op:ident, $method:ident) => {
        impl<T: FloatScalar> $OpAssign for Quaternion<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$method(*self, rhs);
            }
        }

        impl<T: FloatScalar> $OpAssign<&Quaternion<T>> for Quaternion<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Quaternion<T>) {
                *self = $Op::$method(*self, *rhs);
            }
        }

        impl<T: FloatScalar> $OpAssign<T> for Quaternion<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$method(*self, rhs);
            }
        }
    };
}

impl_op_assign!(AddAssign, add_assign, Add, add);
impl_op_assign!(SubAssign, sub_assign, Sub, sub);
impl_op_assign!(MulAssign, mul_assign, Mul, mul);
impl_op_assign!(DivAssign, div_assign, Div, div);

/// Chainable compound assignment.
///
/// Each method mutates `self` exactly like the matching `op=` operator and
/// returns the same handle, so calls can be strung together:
///
/// ```
/// use hamiltonian::Quaternion;
///
/// let mut q = Quaternion::new(1.0, 1.0, 0.0, 0.0);
/// q.add_in_place(1.0_f64).mul_in_place(Quaternion::i(1.0));
/// assert_eq!(q, Quaternion::new(-1.0, 2.0, 0.0, 0.0));
/// ```
impl<T: FloatScalar> Quaternion<T> {
    /// `self += rhs`, returning `self` for chaining.
    #[inline]
    pub fn add_in_place<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: AddAssign<R>,
    {
        *self += rhs;
        self
    }

    /// `self -= rhs`, returning `self` for chaining.
    #[inline]
    pub fn sub_in_place<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: SubAssign<R>,
    {
        *self -= rhs;
        self
    }

    /// `self *= rhs`, returning `self` for chaining.
    #[inline]
    pub fn mul_in_place<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: MulAssign<R>,
    {
        *self *= rhs;
        self
    }

    /// `self /= rhs`, returning `self` for chaining.
    #[inline]
    pub fn div_in_place<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: DivAssign<R>,
    {
        *self /= rhs;
        self
    }
}

// ── num-traits identities ───────────────────────────────────────────

impl<T: FloatScalar> Zero for Quaternion<T> {
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl<T: FloatScalar> One for Quaternion<T> {
    #[inline]
    fn one() -> Self {
        Self::from_scalar(T::one())
    }
}

// ── Iterator folds ──────────────────────────────────────────────────
// Products fold left to right: [a, b, c] → (a * b) * c.

impl<T: FloatScalar> Sum for Quaternion<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<'a, T: FloatScalar> Sum<&'a Quaternion<T>> for Quaternion<T> {
    fn sum<I: Iterator<Item = &'a Quaternion<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<T: FloatScalar> Product for Quaternion<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, q| acc * q)
    }
}

impl<'a, T: FloatScalar> Product<&'a Quaternion<T>> for Quaternion<T> {
    fn product<I: Iterator<Item = &'a Quaternion<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, q| acc * q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Q = Quaternion<f64>;

    const TOL: f64 = 1e-12;

    fn approx_eq(a: &Q, b: &Q) -> bool {
        (a.real - b.real).abs() < TOL
            && (a.imaginary_x - b.imaginary_x).abs() < TOL
            && (a.imaginary_y - b.imaginary_y).abs() < TOL
            && (a.imaginary_z - b.imaginary_z).abs() < TOL
    }

    // ── Basis multiplication table ───────────────────────────────

    #[test]
    fn basis_products() {
        let one = Q::one();
        let i = Q::i(1.0);
        let j = Q::j(1.0);
        let k = Q::k(1.0);

        assert_eq!(i * i, -one);
        assert_eq!(j * j, -one);
        assert_eq!(k * k, -one);
        assert_eq!(i * j * k, -one);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * j, -i);
        assert_eq!(k * i, j);
        assert_eq!(i * k, -j);
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let a = Q::new(-5.0, -5.0, 4.5, -2.0);
        let b = Q::new(-1.0, -1.0, -1.5, -3.5);
        assert_eq!(a * b, Q::new(-0.25, -8.75, -12.5, 31.5));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = Q::new(0.5, 1.0, -1.5, 2.0);
        let b = Q::new(-1.0, 0.25, 2.0, 0.5);
        let c = Q::new(2.0, -0.5, 0.0, 1.0);
        assert!(approx_eq(&((a * b) * c), &(a * (b * c))));
    }

    #[test]
    fn norm_is_multiplicative() {
        let a = Q::new(1.0, 2.0, 3.0, 4.0);
        let b = Q::new(-0.5, 1.5, 0.0, 2.0);
        assert_eq!((a * b).norm(), a.norm() * b.norm());
    }

    // ── Division ─────────────────────────────────────────────────

    #[test]
    fn division_matches_inverse_product() {
        let a = Q::new(3.0, -3.0, 3.0, -3.5);
        let b = Q::new(1.0, -3.0, 4.5, 1.0);
        assert_eq!(a / b, Q::new(0.704, -0.408, -0.768, -0.064));
        assert!(approx_eq(&(a / b), &(a * b.inverse())));
    }

    #[test]
    fn self_division_is_one() {
        for q in [
            Q::new(-3.0, 5.0, 0.0, 4.5),
            Q::new(-4.0, -2.5, 1.5, 3.0),
            Q::new(5.0, 1.0, -4.5, 1.5),
        ] {
            assert_eq!(q / q, 1.0);
        }
    }

    #[test]
    fn self_division_is_one_for_inexact_components() {
        for q in [
            Q::new(-5.0, -4.5, -5.0, 0.1),
            Q::new(0.1, 0.3, 1.7, -2.9),
            Q::new(1.7, -0.3, 0.1, 0.7),
            Q::new(-0.3, 1e-3, 3.3, -1.1),
        ] {
            assert_eq!(q / q, 1.0);

            let mut a = q;
            a /= a;
            assert_eq!(a, 1.0);

            let mut a = q;
            a.div_in_place(a);
            assert_eq!(a, 1.0);
            assert_eq!(q.checked_div(q), Ok(Q::one()));
        }
    }

    #[test]
    fn division_by_zero_is_unguarded() {
        let q = Q::new(1.0, 2.0, 3.0, 4.0) / Q::zero();
        assert!(!q.real.is_finite());
        assert!(q.imaginary_x.is_nan() || q.imaginary_x.is_infinite());
    }

    #[test]
    fn checked_div() {
        let a = Q::new(3.0, -3.0, 3.0, -3.5);
        let b = Q::new(1.0, -3.0, 4.5, 1.0);
        assert_eq!(a.checked_div(b), Ok(a / b));
        assert_eq!(a.checked_div(Q::zero()), Err(QuaternionError::ZeroNorm));
    }

    // ── Reference variants ───────────────────────────────────────

    #[test]
    fn ref_variants() {
        let a = Q::new(1.0, -2.0, 0.5, 3.0);
        let b = Q::new(-1.5, 0.0, 2.0, 1.0);

        for (x, y) in [(&a, &b), (&b, &a)] {
            assert_eq!(x + y, *x + *y);
            assert_eq!(*x - y, *x - *y);
            assert_eq!(x * *y, *x * *y);
            assert_eq!(x / y, *x / *y);
        }
        assert_eq!(-&a, -a);
        assert_eq!(&a * 2.0, a * 2.0);
        assert_eq!(2.0 * &a, 2.0 * a);
    }

    // ── Scalar interoperability ──────────────────────────────────

    #[test]
    fn scalar_promotion_matches_quaternion_form() {
        let q = Q::new(1.0, -4.5, 2.5, 2.5);
        let s = 3.0;
        let p = Q::from_scalar(s);

        assert_eq!(q + s, q + p);
        assert_eq!(s - q, p - q);
        assert_eq!(q * s, q * p);
        assert_eq!(s / q, p / q);
    }

    #[test]
    fn scalar_equality() {
        assert_eq!(Q::from_scalar(2.5), 2.5);
        assert_eq!(2.5, Q::from_scalar(2.5));
        assert_ne!(Q::new(2.5, 0.0, 0.0, 1.0), 2.5);
        assert_ne!(2.5, Q::new(2.5, 0.0, -1.0, 0.0));
        assert_eq!(Q::new(-0.0, 0.0, -0.0, 0.0), 0.0);
    }

    #[test]
    fn scalar_compound_assignment() {
        let q = Q::new(1.0, -4.5, 2.5, 2.5);
        let mut m = q;
        m += 2.0;
        assert_eq!(m, q + 2.0);
        m = q;
        m -= 2.0;
        assert_eq!(m, q - 2.0);
        m = q;
        m *= 2.0;
        assert_eq!(m, q * 2.0);
        m = q;
        m /= 2.0;
        assert_eq!(m, q / 2.0);
    }

    #[test]
    fn f32_scalar_ops() {
        let q = Quaternion::new(1.0_f32, 2.0, -1.0, 0.5);
        assert_eq!(q * 2.0_f32, 2.0_f32 * q);
        assert_eq!(q + 1.0_f32, 1.0_f32 + q);
        assert_eq!(1.0_f32, Quaternion::<f32>::one());
    }

    // ── In-place forms ───────────────────────────────────────────

    #[test]
    fn in_place_returns_same_handle() {
        let mut q = Q::new(-4.0, -1.5, -3.5, -5.0);
        let rhs = Q::new(-0.5, 2.0, 1.0, -0.5);
        let q_ptr: *const Q = &q;

        let r: *const Q = q.add_in_place(rhs);
        assert!(core::ptr::eq(r, q_ptr));
        let r: *const Q = q.sub_in_place(&rhs);
        assert!(core::ptr::eq(r, q_ptr));
        let r: *const Q = q.mul_in_place(rhs);
        assert!(core::ptr::eq(r, q_ptr));
        let r: *const Q = q.div_in_place(2.0_f64);
        assert!(core::ptr::eq(r, q_ptr));
    }

    #[test]
    fn in_place_with_self() {
        let original = Q::new(3.5, -4.5, -4.5, -2.0);

        let mut q = original;
        q.mul_in_place(q);
        assert_eq!(q, original * original);

        let mut q = original;
        q.sub_in_place(q);
        assert_eq!(q, Q::zero());

        let mut q = original;
        q.div_in_place(q);
        assert_eq!(q, 1.0);
    }

    // ── num-traits / iterator folds ──────────────────────────────

    #[test]
    fn zero_and_one() {
        assert!(Q::zero().is_zero());
        assert!(Q::new(-0.0, 0.0, 0.0, -0.0).is_zero());
        assert!(!Q::i(1.0).is_zero());
        assert!(Q::one().is_one());
        let q = Q::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * Q::one(), q);
        assert_eq!(Q::one() * q, q);
        assert_eq!(q + Q::zero(), q);
    }

    #[test]
    fn sum_and_product() {
        let qs = [Q::i(1.0), Q::j(1.0), Q::k(1.0)];

        let total: Q = qs.iter().sum();
        assert_eq!(total, Q::new(0.0, 1.0, 1.0, 1.0));

        let product: Q = qs.iter().product();
        assert_eq!(product, -1.0);

        let reversed: Q = qs.into_iter().rev().product();
        assert_eq!(reversed, 1.0);

        let empty: Q = core::iter::empty::<Q>().product();
        assert_eq!(empty, 1.0);
    }
}
