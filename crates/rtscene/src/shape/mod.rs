//! Primitive shapes of the document: spheres, planes and cubes.
//!
//! The renderer treats every primitive as a unit shape placed by a transform, so the
//! geometric parameters are fixed and all sizing goes through `transform.scale`.

use glam::Vec3;
use serde::{Serialize, Serializer};

use crate::{
    material::{MaterialDescriptor, MaterialNode, PatternNode},
    math::{
        euler::Euler,
        remap::{remap_point, remap_rotation, RotationConvention, Tuple4, POINT_W},
    },
    scene::{Annotations, HostObject, ObjectData},
};

pub const UNIT_RADIUS: f32 = 1.0;
pub const UNIT_EXTENT: f32 = 1.0;
pub const ORIGIN: Tuple4 = [0.0, 0.0, 0.0, POINT_W];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeType {
    Sphere = 0,
    Plane = 1,
    Cube = 2,
}

impl ShapeType {
    /// Discovery order of the exporter
    pub const ALL: [ShapeType; 3] = [ShapeType::Sphere, ShapeType::Plane, ShapeType::Cube];

    /// Substring an object name must contain to be exported as this shape
    pub fn name_tag(self) -> &'static str {
        match self {
            ShapeType::Sphere => "Sphere",
            ShapeType::Plane => "Plane",
            ShapeType::Cube => "Cube",
        }
    }

    /// Case sensitive substring match: "MySpherePrototype" is a sphere too.
    pub fn matches_name(self, name: &str) -> bool {
        name.contains(self.name_tag())
    }
}

impl Serialize for ShapeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A mesh object selected for export
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor<'a> {
    pub name: &'a str,
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
    pub material: Option<&'a MaterialDescriptor>,
    pub annotations: &'a Annotations,
}

impl<'a> ShapeDescriptor<'a> {
    /// Returns `None` if `object` is not a mesh
    pub fn from_object(object: &'a HostObject) -> Option<Self> {
        let ObjectData::Mesh(mesh) = &object.data else {
            return None;
        };
        Some(Self {
            name: &object.name,
            position: Vec3::from_array(object.transform.location),
            rotation: object.transform.rotation,
            scale: Vec3::from_array(object.transform.scale),
            material: mesh.material.as_ref(),
            annotations: &mesh.annotations,
        })
    }

    /// Never fails: shapes without a material get the default one
    pub fn material_node(&self) -> MaterialNode {
        let material = match self.material {
            Some(material) => MaterialNode::from_descriptor(material),
            None => {
                log::warn!("{}: no material, using the default one", self.name);
                MaterialNode::default()
            }
        };
        material.with_pattern(PatternNode::from_annotations(self.annotations))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformNode {
    pub translation: Tuple4,
    pub rotation: Tuple4,
    pub scale: Tuple4,
}

impl TransformNode {
    pub fn new(shape: &ShapeDescriptor, convention: RotationConvention) -> Self {
        Self {
            translation: remap_point(shape.position),
            rotation: remap_rotation(shape.rotation, convention, POINT_W),
            scale: remap_point(shape.scale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Tuple4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<f32>,
    pub transform: TransformNode,
    pub material: MaterialNode,
}

impl ShapeNode {
    pub fn new(
        shape_type: ShapeType,
        shape: &ShapeDescriptor,
        convention: RotationConvention,
    ) -> Self {
        let node = Self {
            name: shape.name.to_owned(),
            shape_type,
            radius: None,
            center: None,
            extent: None,
            transform: TransformNode::new(shape, convention),
            material: shape.material_node(),
        };

        match shape_type {
            ShapeType::Sphere => Self {
                radius: Some(UNIT_RADIUS),
                center: Some(ORIGIN),
                ..node
            },
            ShapeType::Plane => Self {
                extent: Some(UNIT_EXTENT),
                ..node
            },
            ShapeType::Cube => node,
        }
    }

    pub fn sphere(shape: &ShapeDescriptor, convention: RotationConvention) -> Self {
        Self::new(ShapeType::Sphere, shape, convention)
    }

    pub fn plane(shape: &ShapeDescriptor, convention: RotationConvention) -> Self {
        Self::new(ShapeType::Plane, shape, convention)
    }

    pub fn cube(shape: &ShapeDescriptor, convention: RotationConvention) -> Self {
        Self::new(ShapeType::Cube, shape, convention)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        material::{MaterialDescriptor, MaterialNode, PrincipledInputs, ShadingNode},
        math::{euler::Euler, remap::RotationConvention},
        scene::{AnnotationValue, Annotations},
    };

    use super::*;

    fn descriptor<'a>(
        name: &'a str,
        material: Option<&'a MaterialDescriptor>,
        annotations: &'a Annotations,
    ) -> ShapeDescriptor<'a> {
        ShapeDescriptor {
            name,
            position: Vec3::new(1., 2., 3.),
            rotation: Euler::new(0.1, 0.2, 0.3),
            scale: Vec3::new(2., 4., 8.),
            material,
            annotations,
        }
    }

    #[test]
    fn name_discrimination() {
        assert!(ShapeType::Sphere.matches_name("Sphere.001"));
        assert!(ShapeType::Sphere.matches_name("MySpherePrototype"));
        assert!(!ShapeType::Sphere.matches_name("sphere"));
        assert!(ShapeType::Cube.matches_name("Cube"));
        assert!(!ShapeType::Plane.matches_name("Airplane"));
        assert!(ShapeType::Plane.matches_name("AirPlane"));
    }

    #[test]
    fn sphere_node() {
        let annotations = Annotations::new();
        let node = ShapeNode::sphere(
            &descriptor("Sphere", None, &annotations),
            RotationConvention::Canonical,
        );

        assert_eq!(node.name, "Sphere");
        assert_eq!(node.shape_type as u8, 0);
        assert_eq!(node.radius, Some(1.0));
        assert_eq!(node.center, Some([0., 0., 0., 1.]));
        assert_eq!(node.extent, None);
        assert_eq!(node.transform.translation, [1., 3., 2., 1.]);
        assert_eq!(node.transform.rotation, [0.1, 0.3, 0.2, 1.]);
        assert_eq!(node.transform.scale, [2., 8., 4., 1.]);
        assert_eq!(node.material, MaterialNode::default());
    }

    #[test]
    fn plane_and_cube_nodes() {
        let annotations = Annotations::new();
        let shape = descriptor("Thing", None, &annotations);

        let plane = ShapeNode::plane(&shape, RotationConvention::Canonical);
        assert_eq!(plane.shape_type as u8, 1);
        assert_eq!(plane.extent, Some(1.0));
        assert_eq!((plane.radius, plane.center), (None, None));

        let cube = ShapeNode::cube(&shape, RotationConvention::NegatedZ);
        assert_eq!(cube.shape_type as u8, 2);
        assert_eq!((cube.radius, cube.center, cube.extent), (None, None, None));
        assert_eq!(cube.transform.rotation, [0.1, -0.3, 0.2, 1.]);
    }

    #[test]
    fn material_and_pattern_are_merged() {
        let material = MaterialDescriptor {
            name: "Glass".into(),
            nodes: vec![ShadingNode::PrincipledBsdf(PrincipledInputs {
                transmission: 1.0,
                ..Default::default()
            })],
        };
        let mut annotations = Annotations::new();
        annotations.insert("Pattern".into(), AnnotationValue::Text("Stripes".into()));

        let node = ShapeNode::cube(
            &descriptor("Cube", Some(&material), &annotations),
            RotationConvention::Canonical,
        );
        assert!(!node.material.cast_shadow);
        assert_eq!(node.material.refractive_index, 1.45);
        assert_eq!(node.material.pattern.unwrap().name, "Stripes");
    }

    #[test]
    fn type_serializes_as_integer() {
        let yaml = serde_yaml::to_string(&ShapeType::Cube).unwrap();
        assert_eq!(yaml.trim(), "2");
    }
}
