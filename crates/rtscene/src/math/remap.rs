//! Conversion from the modeling tool's axes (X right, Y forward, Z up) to the
//! renderer's axes (X right, Y up, Z forward).
//!
//! Every vector leaving the exporter is a homogeneous 4-tuple: `w = 1.0` for points and
//! anything the renderer reads as a point (translation, scale, eye, center), `w = 0.0`
//! for true directions (up vector, colors, camera rotation).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::euler::Euler;

/// Homogeneous vector as written in the document
pub type Tuple4 = [f32; 4];

pub const POINT_W: f32 = 1.0;
pub const DIRECTION_W: f32 = 0.0;

/// Exchange the Y and Z components. Applying it twice gives back the input.
pub fn swap_yz(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

pub fn remap_point(v: Vec3) -> Tuple4 {
    swap_yz(v).extend(POINT_W).to_array()
}

pub fn remap_direction(v: Vec3) -> Tuple4 {
    swap_yz(v).extend(DIRECTION_W).to_array()
}

/// How the Z angle of a shape rotation is carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationConvention {
    /// Plain Y/Z swap, like every other vector
    #[default]
    Canonical,
    /// Swap and negate the Z angle, as some older exports did for shapes
    NegatedZ,
}

/// Remap a rotation given as euler angles. `w` is chosen by the caller: shape transforms
/// write `1.0`, the camera writes `0.0`.
pub fn remap_rotation(r: Euler, convention: RotationConvention, w: f32) -> Tuple4 {
    let z = match convention {
        RotationConvention::Canonical => r.z,
        RotationConvention::NegatedZ => -r.z,
    };
    [r.x, z, r.y, w]
}
