use glam::Vec3;
use serde::Serialize;

use crate::{
    math::{
        euler::Euler,
        point::Point,
        remap::{
            remap_direction, remap_rotation, RotationConvention, Tuple4, DIRECTION_W,
        },
    },
    scene::{HostObject, ObjectData},
};

/// The active camera, resolved from the host
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDescriptor {
    pub position: Point,
    pub rotation: Euler,
    /// Vertical field of view, in radians
    pub vfov: f32,

    /// width of the output image, in pixel
    pub width: u32,
    /// height of the output image, in pixel
    pub height: u32,
}

impl CameraDescriptor {
    /// Returns `None` if `object` is not a camera
    pub fn from_object(object: &HostObject) -> Option<Self> {
        let ObjectData::Camera(data) = &object.data else {
            return None;
        };
        Some(Self {
            position: Point::from_array(object.transform.location),
            rotation: object.transform.rotation,
            vfov: data.angle,
            width: data.resolution_x,
            height: data.resolution_y,
        })
    }

    /// Eye, target and up vector in the host's axes.
    ///
    /// The camera looks down its local -Z axis with local +Y up.
    pub fn basis(&self) -> CameraBasis {
        CameraBasis {
            eye: self.position,
            target: self.position + self.rotation.rotate(Vec3::NEG_Z),
            up: self.rotation.rotate(Vec3::Y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub eye: Point,
    pub target: Point,
    pub up: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraNode {
    pub image_width: u32,
    pub image_height: u32,
    pub eye: Tuple4,
    pub center: Tuple4,
    pub up: Tuple4,
    pub rotation: Tuple4,
    pub fov: f32,
}

impl From<&CameraDescriptor> for CameraNode {
    fn from(camera: &CameraDescriptor) -> Self {
        let basis = camera.basis();
        Self {
            image_width: camera.width,
            image_height: camera.height,
            eye: basis.eye.to_tuple(),
            center: basis.target.to_tuple(),
            up: remap_direction(basis.up),
            // The camera rotation is never negated, whatever the shapes do
            rotation: remap_rotation(camera.rotation, RotationConvention::Canonical, DIRECTION_W),
            fov: camera.vfov,
        }
    }
}
