//! Generic 2- and 3-dimensional vector algebra.
//!
//! [`Vec2`] and [`Vec3`] are immutable value types: every operation returns a new vector and never
//! modifies its operands. Both are generic over the component type, which defaults to `f64`.
//! Arithmetic is available for any [`num_traits::Num`] component, while operations that need square
//! roots or fractional factors (magnitude, normalisation, angles, interpolation) require a
//! [`num_traits::Float`] component.
//!
//! Operations whose result is mathematically undefined return [`VecError`] instead of producing
//! `NaN` or infinities:
//!
//! ```
//! use mikelib_vec::{Vec3, VecError};
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.cross(&b), Vec3::new(-3.0, 6.0, -3.0));
//!
//! assert!(matches!(Vec3::<f64>::zero().normalised(), Err(VecError::ZeroLengthVector)));
//! ```

pub mod error;
#[cfg(feature = "nalgebra")]
mod nalgebra;
mod vec2;
mod vec3;

pub use error::VecError;
pub use vec2::Vec2;
pub use vec3::Vec3;
