use glam::Vec3;
use serde::Serialize;

use crate::{
    color::Rgb,
    math::remap::{remap_point, Tuple4},
    scene::{HostObject, LightType, ObjectData},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PointLightDescriptor {
    pub position: Vec3,
    pub color: Rgb,
    pub energy: f32,
}

impl PointLightDescriptor {
    /// Returns `None` for anything that is not a point light
    pub fn from_object(object: &HostObject) -> Option<Self> {
        match &object.data {
            ObjectData::Light(light) if light.light_type == LightType::Point => Some(Self {
                position: Vec3::from_array(object.transform.location),
                color: light.color,
                energy: light.energy,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNode {
    pub name: String,
    pub location: Tuple4,
    pub color: Tuple4,
    pub light_energy: f32,
}

impl LightNode {
    pub fn new(name: &str, light: &PointLightDescriptor) -> Self {
        Self {
            name: name.to_owned(),
            location: remap_point(light.position),
            color: light.color.to_tuple(),
            light_energy: light.energy,
        }
    }
}
