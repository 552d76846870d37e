//! Read-only view of the host's scene.
//!
//! The host environment implements [SceneSource]; [SceneSnapshot] is a plain data capture
//! of the same information that can be loaded from disk.

use std::fmt::Display;

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::{color::Rgb, material::MaterialDescriptor, math::euler::Euler, shape::ShapeType};

pub trait SceneSource {
    fn scene_name(&self) -> &str;

    /// The object the host designates as the active camera. It is not guaranteed to be a camera.
    fn active_camera(&self) -> Option<&HostObject>;

    fn objects(&self) -> &[HostObject];

    /// Meshes classified as `shape_type`, in host order
    fn shapes(&self, shape_type: ShapeType) -> Box<dyn Iterator<Item = &HostObject> + '_> {
        Box::new(
            self.objects()
                .iter()
                .filter(move |obj| obj.is_mesh() && shape_type.matches_name(&obj.name)),
        )
    }

    fn point_lights(&self) -> Box<dyn Iterator<Item = &HostObject> + '_> {
        Box::new(self.objects().iter().filter(|obj| match &obj.data {
            ObjectData::Light(light) if light.light_type == LightType::Point => true,
            ObjectData::Light(light) => {
                log::debug!("skipping light {:?} of type {:?}", obj.name, light.light_type);
                false
            }
            _ => false,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub name: String,
    /// Name of the active camera object
    #[serde(default)]
    pub active_camera: Option<String>,
    #[serde(default)]
    pub objects: Vec<HostObject>,
}

impl SceneSource for SceneSnapshot {
    fn scene_name(&self) -> &str {
        &self.name
    }

    fn active_camera(&self) -> Option<&HostObject> {
        let name = self.active_camera.as_deref()?;
        let object = self.objects.iter().find(|obj| obj.name == name);
        if object.is_none() {
            log::debug!("active camera {name:?} is not part of the scene");
        }
        object
    }

    fn objects(&self) -> &[HostObject] {
        &self.objects
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostObject {
    pub name: String,
    #[serde(flatten)]
    pub transform: ObjectTransform,
    pub data: ObjectData,
}

impl HostObject {
    pub fn is_mesh(&self) -> bool {
        matches!(self.data, ObjectData::Mesh(_))
    }
}

/// Location, rotation and scale in the host's axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTransform {
    pub location: [f32; 3],
    pub rotation: Euler,
    pub scale: [f32; 3],
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            location: [0.0; 3],
            rotation: Euler::ZERO,
            scale: [1.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectData {
    Mesh(MeshData),
    Light(LightData),
    Camera(CameraData),
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshData {
    pub material: Option<MaterialDescriptor>,
    /// Free-form key/values attached to the mesh data block
    pub annotations: Annotations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LightType {
    Point,
    Sun,
    Spot,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightData {
    pub light_type: LightType,
    pub color: Rgb,
    pub energy: f32,
}

impl Default for LightData {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            color: crate::color::linear::WHITE,
            energy: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraData {
    /// Vertical field of view, in radians
    pub angle: f32,
    /// Focal length in millimeters
    pub lens: f32,
    pub sensor_width: f32,
    pub sensor_height: f32,
    /// Output image size, in pixels
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            angle: 0.691_150_4,
            lens: 50.0,
            sensor_width: 36.0,
            sensor_height: 24.0,
            resolution_x: 1920,
            resolution_y: 1080,
        }
    }
}

pub type Annotations = LinkedHashMap<String, AnnotationValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Int(i64),
    Float(f64),
    Text(String),
    Array(Vec<f64>),
}

impl AnnotationValue {
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            AnnotationValue::Int(i) => Some(i as f32),
            AnnotationValue::Float(f) => Some(f as f32),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<Vec<f32>> {
        match self {
            AnnotationValue::Array(values) => Some(values.iter().map(|&v| v as f32).collect()),
            _ => None,
        }
    }

    /// The first three numbers of an array
    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match self.as_floats()?.as_slice() {
            [x, y, z, ..] => Some([*x, *y, *z]),
            _ => None,
        }
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationValue::Int(i) => write!(f, "{i}"),
            AnnotationValue::Float(x) => write!(f, "{x}"),
            AnnotationValue::Text(s) => f.write_str(s),
            AnnotationValue::Array(values) => write!(f, "{values:?}"),
        }
    }
}
