use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler angles in radians, in the modeling tool's default `XYZ` order.
///
/// `X` is applied first, then `Y`, then `Z`, all about the fixed world axes, so the
/// equivalent rotation is $R_z R_y R_x$.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const ZERO: Euler = Euler {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate `v` by these angles
    pub fn rotate(self, v: Vec3) -> Vec3 {
        Quat::from(self).mul_vec3(v)
    }
}

impl From<Euler> for Quat {
    fn from(this: Euler) -> Self {
        // Composed by hand: libraries disagree on what an "XYZ" euler order means.
        Quat::from_rotation_z(this.z) * Quat::from_rotation_y(this.y) * Quat::from_rotation_x(this.x)
    }
}

impl From<[f32; 3]> for Euler {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Euler> for [f32; 3] {
    fn from(val: Euler) -> Self {
        [val.x, val.y, val.z]
    }
}
