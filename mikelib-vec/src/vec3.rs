use std::fmt;

use approx::AbsDiffEq;
use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::VecError;
use crate::vec2::Vec2;

/// Vector in 3-dimensional cartesian space.
///
/// Supports the same operations as [`Vec2`] with the addition of [`Vec3::cross`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash)]
pub struct Vec3<Num = f64> {
    x: Num,
    y: Num,
    z: Num,
}

impl<Num> Vec3<Num> {
    /// Creates a new vector with the given components.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }
}

impl<Num: Copy> Vec3<Num> {
    /// Creates a 3d vector from a 2d one, using `z` as the third component.
    pub fn from_vec2(v: Vec2<Num>, z: Num) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// Returns x component of the vector.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Returns y component of the vector.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Returns z component of the vector.
    pub fn z(&self) -> Num {
        self.z
    }

    /// Returns components of the vector as an array of `Num`.
    pub fn coords(&self) -> [Num; 3] {
        [self.x, self.y, self.z]
    }

    /// Drops the z component.
    pub fn truncate(&self) -> Vec2<Num> {
        Vec2::new(self.x, self.y)
    }

    /// Converts the vector into a vector with a different component type.
    ///
    /// Returns `None` if any of the components cannot be represented by `T`.
    pub fn cast<T: NumCast>(&self) -> Option<Vec3<T>>
    where
        Num: ToPrimitive,
    {
        Some(Vec3 {
            x: <T as NumCast>::from(self.x)?,
            y: <T as NumCast>::from(self.y)?,
            z: <T as NumCast>::from(self.z)?,
        })
    }
}

impl<Num: num_traits::Num + Copy> Vec3<Num> {
    /// Vector with all components equal to zero.
    pub fn zero() -> Self {
        Self::new(Num::zero(), Num::zero(), Num::zero())
    }

    /// Dot product of the two vectors.
    pub fn dot(&self, other: &Self) -> Num {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    ///
    /// The result is orthogonal to both operands. The operation is anti-commutative, and the
    /// cross product of a vector with itself is the zero vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Divides every component of the vector by `n`.
    ///
    /// Returns [`VecError::DivideByZero`] if `n` is zero.
    pub fn divide(&self, n: Num) -> Result<Self, VecError> {
        if n.is_zero() {
            return Err(VecError::DivideByZero);
        }

        Ok(Self::new(self.x / n, self.y / n, self.z / n))
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num {
        self.dot(self)
    }

    /// Returns true if all components of the two vectors are exactly equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Returns true if every component of `self` differs from the same component of `other` by
    /// no more than `threshold`.
    pub fn almost_equals(&self, other: &Self, threshold: Num) -> bool
    where
        Num: PartialOrd,
    {
        fn abs_diff<Num: num_traits::Num + PartialOrd>(a: Num, b: Num) -> Num {
            if a >= b {
                a - b
            } else {
                b - a
            }
        }

        abs_diff(self.x, other.x) <= threshold
            && abs_diff(self.y, other.y) <= threshold
            && abs_diff(self.z, other.z) <= threshold
    }
}

impl<Num: ToPrimitive + Copy> Vec3<Num> {
    fn to_f64(self) -> Vec3<f64> {
        Vec3::new(
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
            self.z.to_f64().unwrap_or(f64::NAN),
        )
    }

    /// Magnitude of the vector as `f64`, for any component type including integers.
    pub fn magnitude_f64(&self) -> f64 {
        self.to_f64().magnitude()
    }

    /// Same as [`Vec3::normalised`], computed in `f64` for any component type.
    pub fn normalised_f64(&self) -> Result<Vec3<f64>, VecError> {
        self.to_f64().normalised()
    }

    /// Same as [`Vec3::angle`], computed in `f64` for any component type.
    pub fn angle_f64(&self, other: &Self) -> Result<f64, VecError> {
        self.to_f64().angle(&other.to_f64())
    }

    /// Same as [`Vec3::lerp`], computed in `f64` for any component type.
    pub fn lerp_f64(&self, other: &Self, t: f64) -> Vec3<f64> {
        self.to_f64().lerp(&other.to_f64(), t)
    }
}

impl<Num: Float> Vec3<Num> {
    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num {
        self.magnitude_sq().sqrt()
    }

    /// Returns the vector of length 1 pointing in the same direction as `self`.
    ///
    /// Returns [`VecError::ZeroLengthVector`] for a zero vector.
    pub fn normalised(&self) -> Result<Self, VecError> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VecError::ZeroLengthVector);
        }

        Ok(Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
        ))
    }

    /// Angle between the two vectors in radians, in range `[0, PI]`.
    ///
    /// Returns [`VecError::ZeroLengthVector`] if either vector has zero length.
    pub fn angle(&self, other: &Self) -> Result<Num, VecError> {
        let magnitude = self.magnitude();
        let other_magnitude = other.magnitude();
        if magnitude.is_zero() || other_magnitude.is_zero() {
            return Err(VecError::ZeroLengthVector);
        }

        let cos = self.dot(other) / (magnitude * other_magnitude);
        Ok(cos.max(-Num::one()).min(Num::one()).acos())
    }

    /// Linearly interpolates between `self` and `other` by factor `t`.
    ///
    /// Computes `self + t * (other - self)`, returning exactly `other` at `t = 1`. `t` is not
    /// clamped: values outside of `[0, 1]` extrapolate beyond the segment.
    pub fn lerp(&self, other: &Self, t: Num) -> Self {
        if t == Num::one() {
            return *other;
        }

        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
            self.z + t * (other.z - self.z),
        )
    }

    /// Linearly interpolates between `self` and `other` with `t` clamped into `[0, 1]`.
    pub fn lerp_clamped(&self, other: &Self, t: Num) -> Self {
        self.lerp(other, t.max(Num::zero()).min(Num::one()))
    }
}

impl<Num> std::ops::Add<Vec3<Num>> for Vec3<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Vec3<Num>;

    fn add(self, rhs: Vec3<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<Num> std::ops::Sub<Vec3<Num>> for Vec3<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vec3<Num>;

    fn sub(self, rhs: Vec3<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vec3<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vec3<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl<Num> std::ops::Neg for Vec3<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vec3<Num>;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<Num> AbsDiffEq for Vec3<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<Num> From<[Num; 3]> for Vec3<Num> {
    fn from([x, y, z]: [Num; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<Num> From<(Num, Num, Num)> for Vec3<Num> {
    fn from((x, y, z): (Num, Num, Num)) -> Self {
        Self { x, y, z }
    }
}

impl<Num> From<Vec3<Num>> for [Num; 3] {
    fn from(v: Vec3<Num>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<Num: fmt::Display> fmt::Display for Vec3<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn samples() -> [Vec3; 5] {
        [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 8.0),
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(1e6, -1e-6, 42.0),
            Vec3::new(0.0, 0.0, -1.0),
        ]
    }

    #[test]
    fn add_and_subtract() {
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(5.0, 7.0, 9.0)
        );
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) - Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(-3.0, -3.0, -3.0)
        );
    }

    #[test]
    fn subtract_self_is_zero() {
        for v in samples() {
            assert!((v - v).equals(&Vec3::zero()));
        }
    }

    #[test]
    fn add_then_subtract_restores() {
        let samples = samples();
        for a in samples {
            for b in samples {
                assert_abs_diff_eq!((a + b) - b, a, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn dot() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(&Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).dot(&Vec3::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(Vec3::new(1.0, -2.0, 0.5) * 4.0, Vec3::new(4.0, -8.0, 2.0));
        assert_eq!(
            Vec3::new(1.0, -2.0, 0.5).divide(0.5),
            Ok(Vec3::new(2.0, -4.0, 1.0))
        );
        assert_matches!(
            Vec3::new(1.0, -2.0, 0.5).divide(0.0),
            Err(VecError::DivideByZero)
        );
        assert_matches!(Vec3::<f64>::zero().divide(0.0), Err(VecError::DivideByZero));
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vec3::<f64>::zero().magnitude(), 0.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Vec3::new(-1.0, -4.0, 8.0).magnitude(), 9.0);
    }

    #[test]
    fn normalised() {
        assert_eq!(
            Vec3::new(0.0, 0.0, -5.0).normalised(),
            Ok(Vec3::new(0.0, 0.0, -1.0))
        );
        for v in samples() {
            let n = v.normalised().expect("non-zero vector");
            assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(n.angle(&v).expect("non-zero vector"), 0.0, epsilon = 1e-7);
        }
        assert_matches!(
            Vec3::<f64>::zero().normalised(),
            Err(VecError::ZeroLengthVector)
        );
    }

    #[test]
    fn angle() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(x.angle(&y).expect("non-zero"), FRAC_PI_2, epsilon = 1e-7);
        assert_abs_diff_eq!(x.angle(&-x).expect("non-zero"), PI, epsilon = 1e-7);
        for v in samples() {
            assert_abs_diff_eq!(v.angle(&v).expect("non-zero"), 0.0, epsilon = 1e-7);
        }

        assert_matches!(x.angle(&Vec3::zero()), Err(VecError::ZeroLengthVector));
        assert_matches!(Vec3::zero().angle(&x), Err(VecError::ZeroLengthVector));
    }

    #[test]
    fn lerp() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(3.0, 4.0, -1.0);
        assert_eq!(a.lerp(&b, 0.5), Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(a.lerp(&b, 3.0), Vec3::new(7.0, 8.0, -9.0));
        assert_eq!(a.lerp(&b, -1.0), Vec3::new(-1.0, 0.0, 7.0));

        for a in samples() {
            for b in samples() {
                assert_eq!(a.lerp(&b, 0.0), a);
                assert_eq!(a.lerp(&b, 1.0), b);
            }
        }
    }

    #[test]
    fn lerp_between_equal_vectors_stays_put() {
        for a in samples() {
            for t in [-5.0, 3.0, 10.0, 1e17] {
                assert_eq!(a.lerp(&a, t), a, "lerp({a}, {a}, {t})");
            }
        }
    }

    #[test]
    fn lerp_clamped() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(3.0, 4.0, -1.0);
        assert_eq!(a.lerp_clamped(&b, -0.5), a);
        assert_eq!(a.lerp_clamped(&b, 1.5), b);
        assert_eq!(a.lerp_clamped(&b, 100.0), b);
        for t in [0.0, 0.3, 0.5, 0.75, 1.0] {
            assert_eq!(a.lerp_clamped(&b, t), a.lerp(&b, t));
        }
    }

    #[test]
    fn cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).cross(&Vec3::new(4.0, 5.0, 6.0)),
            Vec3::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn cross_with_self_is_zero() {
        for v in samples() {
            assert!(v.cross(&v).equals(&Vec3::zero()));
        }
    }

    #[test]
    fn cross_is_anti_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.cross(&b), -b.cross(&a));
            }
        }
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.5, 0.25, 8.0);
        let c = a.cross(&b);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn equals() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(v.equals(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(!v.equals(&Vec3::new(1.5, 2.0, 3.0)));
        assert!(!v.equals(&Vec3::new(1.0, -2.0, 3.0)));
        assert!(!v.equals(&Vec3::new(1.0, 2.0, 3.5)));
    }

    #[test]
    fn almost_equals() {
        let zero = Vec3::new(0.0, 0.0, 0.0);
        assert!(Vec3::new(0.001, 0.0, 0.0).almost_equals(&zero, 0.01));
        assert!(!Vec3::new(0.001, 0.0, 0.0).almost_equals(&zero, 0.00001));
        assert!(!Vec3::new(0.0, 0.0, 0.5).almost_equals(&zero, 0.1));
        assert!(zero.almost_equals(&Vec3::new(1.0, -1.0, 1.0), 1.0));
        assert!(!zero.almost_equals(&zero, -1.0));
    }

    #[test]
    fn integer_cross() {
        let a = Vec3::new(1i64, 2, 3);
        let b = Vec3::new(4, 5, 6);
        assert_eq!(a.cross(&b), Vec3::new(-3, 6, -3));
        assert_eq!(a.dot(&b), 32);
    }

    #[test]
    fn integer_float_operations() {
        let v = Vec3::new(2i32, 3, 6);
        assert_eq!(v.magnitude_f64(), 7.0);
        assert_eq!(
            Vec3::new(0i32, 0, -5).normalised_f64(),
            Ok(Vec3::new(0.0, 0.0, -1.0))
        );
        assert_matches!(
            Vec3::new(0u32, 0, 0).normalised_f64(),
            Err(VecError::ZeroLengthVector)
        );
        assert_abs_diff_eq!(
            Vec3::new(1i64, 0, 0).angle_f64(&Vec3::new(0, 1, 0)).expect("non-zero"),
            FRAC_PI_2,
            epsilon = 1e-7
        );
        assert_eq!(
            Vec3::new(1i32, 2, 3).lerp_f64(&Vec3::new(3, 4, -1), 0.5),
            Vec3::new(2.0, 3.0, 1.0)
        );
    }

    #[test]
    fn vec2_conversions() {
        let v = Vec3::from_vec2(Vec2::new(1.0, 2.0), 3.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.truncate(), Vec2::new(1.0, 2.0));
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
        assert_eq!(Vec3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(v.cast::<i32>(), Some(Vec3::new(1, 2, 3)));
    }

    #[test]
    fn display() {
        assert_eq!(Vec3::new(-3.0, 6.0, -3.0).to_string(), "(-3, 6, -3)");
    }
}
