use std::ops::{Add, Sub};

use glam::Vec3;

use super::remap::{remap_point, Tuple4};

/// A position in the host's axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Vec3);

impl Point {
    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub fn from_array(arr: [f32; 3]) -> Self {
        Self(Vec3::from_array(arr))
    }

    /// Swapped to the renderer's axes, `w = 1`
    pub fn to_tuple(self) -> Tuple4 {
        remap_point(self.0)
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}
