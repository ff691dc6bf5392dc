use std::fmt;

use approx::AbsDiffEq;
use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::VecError;

/// Vector in 2-dimensional cartesian space.
///
/// `Vec2` is a plain value: all operations return a new vector and leave the operands unchanged.
/// Binary operations only accept operands with the same component type, use [`Vec2::cast`] to
/// convert between component types.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash)]
pub struct Vec2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Vec2<Num> {
    /// Creates a new vector with the given components.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: Copy> Vec2<Num> {
    /// Returns x component of the vector.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Returns y component of the vector.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Returns components of the vector as an array of `Num`.
    pub fn coords(&self) -> [Num; 2] {
        [self.x, self.y]
    }

    /// Converts the vector into a vector with a different component type.
    ///
    /// Returns `None` if any of the components cannot be represented by `T`.
    pub fn cast<T: NumCast>(&self) -> Option<Vec2<T>>
    where
        Num: ToPrimitive,
    {
        Some(Vec2 {
            x: <T as NumCast>::from(self.x)?,
            y: <T as NumCast>::from(self.y)?,
        })
    }
}

impl<Num: num_traits::Num + Copy> Vec2<Num> {
    /// Vector with all components equal to zero.
    pub fn zero() -> Self {
        Self::new(Num::zero(), Num::zero())
    }

    /// Dot product of the two vectors.
    pub fn dot(&self, other: &Self) -> Num {
        self.x * other.x + self.y * other.y
    }

    /// Divides every component of the vector by `n`.
    ///
    /// Returns [`VecError::DivideByZero`] if `n` is zero.
    pub fn divide(&self, n: Num) -> Result<Self, VecError> {
        if n.is_zero() {
            return Err(VecError::DivideByZero);
        }

        Ok(Self::new(self.x / n, self.y / n))
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num {
        self.dot(self)
    }

    /// Returns true if all components of the two vectors are exactly equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns true if every component of `self` differs from the same component of `other` by
    /// no more than `threshold`.
    ///
    /// The check is done separately for each axis, so this is not the euclidean distance between
    /// the vectors. Negative `threshold` never matches.
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

        abs_diff(self.x, other.x) <= threshold && abs_diff(self.y, other.y) <= threshold
    }
}

impl<Num: ToPrimitive + Copy> Vec2<Num> {
    fn to_f64(self) -> Vec2<f64> {
        Vec2::new(
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }

    /// Magnitude of the vector as `f64`, for any component type including integers.
    pub fn magnitude_f64(&self) -> f64 {
        self.to_f64().magnitude()
    }

    /// Same as [`Vec2::normalised`], computed in `f64` for any component type.
    pub fn normalised_f64(&self) -> Result<Vec2<f64>, VecError> {
        self.to_f64().normalised()
    }

    /// Same as [`Vec2::angle`], computed in `f64` for any component type.
    pub fn angle_f64(&self, other: &Self) -> Result<f64, VecError> {
        self.to_f64().angle(&other.to_f64())
    }

    /// Same as [`Vec2::lerp`], computed in `f64` for any component type.
    pub fn lerp_f64(&self, other: &Self, t: f64) -> Vec2<f64> {
        self.to_f64().lerp(&other.to_f64(), t)
    }
}

impl<Num: Float> Vec2<Num> {
    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num {
        self.magnitude_sq().sqrt()
    }

    /// Returns the vector of length 1 pointing in the same direction as `self`.
    ///
    /// A zero vector has no direction, so [`VecError::ZeroLengthVector`] is returned for it.
    pub fn normalised(&self) -> Result<Self, VecError> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VecError::ZeroLengthVector);
        }

        Ok(Self::new(self.x / magnitude, self.y / magnitude))
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
    /// Computes `self + t * (other - self)`. At `t = 0` the result is exactly `self`, at `t = 1`
    /// exactly `other`. Values of `t` outside of `[0, 1]` are not clamped and extrapolate beyond
    /// the segment, e.g. `t = 2` gives `other + (other - self)`. Use [`Vec2::lerp_clamped`] to
    /// stay on the segment.
    pub fn lerp(&self, other: &Self, t: Num) -> Self {
        if t == Num::one() {
            return *other;
        }

        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Same as [`Vec2::lerp`], but `t` is clamped into `[0, 1]` first, so the result always lies
    /// between `self` and `other`.
    pub fn lerp_clamped(&self, other: &Self, t: Num) -> Self {
        self.lerp(other, t.max(Num::zero()).min(Num::one()))
    }
}

impl<Num> std::ops::Add<Vec2<Num>> for Vec2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Vec2<Num>;

    fn add(self, rhs: Vec2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<Num> std::ops::Sub<Vec2<Num>> for Vec2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vec2<Num>;

    fn sub(self, rhs: Vec2<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vec2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vec2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<Num> std::ops::Neg for Vec2<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vec2<Num>;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<Num> AbsDiffEq for Vec2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num> From<[Num; 2]> for Vec2<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self { x, y }
    }
}

impl<Num> From<(Num, Num)> for Vec2<Num> {
    fn from((x, y): (Num, Num)) -> Self {
        Self { x, y }
    }
}

impl<Num> From<Vec2<Num>> for [Num; 2] {
    fn from(v: Vec2<Num>) -> Self {
        [v.x, v.y]
    }
}

impl<Num: fmt::Display> fmt::Display for Vec2<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
