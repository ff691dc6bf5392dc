use nalgebra::{Scalar, Vector2, Vector3};

use crate::{Vec2, Vec3};

impl<Num: Scalar + Copy> From<Vec2<Num>> for Vector2<Num> {
    fn from(v: Vec2<Num>) -> Self {
        Vector2::new(v.x(), v.y())
    }
}

impl<Num: Scalar + Copy> From<Vector2<Num>> for Vec2<Num> {
    fn from(v: Vector2<Num>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl<Num: Scalar + Copy> From<Vec3<Num>> for Vector3<Num> {
    fn from(v: Vec3<Num>) -> Self {
        Vector3::new(v.x(), v.y(), v.z())
    }
}

impl<Num: Scalar + Copy> From<Vector3<Num>> for Vec3<Num> {
    fn from(v: Vector3<Num>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
