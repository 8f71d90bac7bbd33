//! # hamiltonian
//!
//! Quaternion numbers as a first-class numeric type, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use hamiltonian::Quaternion;
//!
//! let a = Quaternion::new(-5.0, -5.0, 4.5, -2.0);
//! let b = Quaternion::new(-1.0, -1.0, -1.5, -3.5);
//!
//! // Hamilton product
//! assert_eq!(a * b, Quaternion::new(-0.25, -8.75, -12.5, 31.5));
//!
//! // Scalars are promoted to (s, 0, 0, 0) on either side
//! assert_eq!(a + 2.0, 2.0 + a);
//! assert_ne!(a / 2.0, 2.0 / a);
//!
//! println!("{}", a); // -5 - 5i + 4.5j - 2k
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`] — [`Quaternion<T>`] with public `real`, `imaginary_x`,
//!   `imaginary_y`, `imaginary_z` fields. Construction from components,
//!   scalars, arrays or imaginary units; conjugate, squared norm, inverse;
//!   prefix/postfix increment and decrement; `+ - * /` and their `op=` forms
//!   against quaternions, references and bare scalars on either side;
//!   chainable `*_in_place` mutators; `Sum`, `Product`, `Zero`, `One`.
//!
//! - [`traits`] — [`FloatScalar`], the component trait (`f32`, `f64`).
//!
//! - [`error`] — [`QuaternionError`] for the checked `try_inverse` /
//!   `checked_div`. The plain operators never fail; dividing by the zero
//!   quaternion yields IEEE non-finite components.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` impl, hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod quaternion;
pub mod traits;

pub use error::QuaternionError;
pub use quaternion::Quaternion;
pub use traits::FloatScalar;
