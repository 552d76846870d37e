//! The scene document handed to the renderer.
//!
//! ```yaml
//! scene:
//!   name: Scene
//!   camera: { imageWidth, imageHeight, eye, center, up, rotation, fov }
//!   objects: { <name>: { name, type, transform, material, ... } }
//!   lights: { <name>: { name, location, color, lightEnergy } }
//! ```

use std::io::Write;

use linked_hash_map::LinkedHashMap;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{camera::CameraNode, error::ExportError, light::LightNode, shape::ShapeNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    /// JSON is a subset of YAML, the renderer reads both.
    ///
    /// JSON has no NaN or infinity: non-finite values are written as `null`, where YAML
    /// keeps them as `.nan` / `.inf`.
    Json,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub scene: SceneDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDocument {
    pub name: String,
    /// An absent camera is written as an empty mapping
    #[serde(serialize_with = "camera_or_empty")]
    pub camera: Option<CameraNode>,
    pub objects: LinkedHashMap<String, ShapeNode>,
    pub lights: LinkedHashMap<String, LightNode>,
}

fn camera_or_empty<S: Serializer>(
    camera: &Option<CameraNode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match camera {
        Some(camera) => camera.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Replace the value of `key` if present, keeping its position, else append it
fn upsert<V>(map: &mut LinkedHashMap<String, V>, key: &str, value: V) {
    match map.get_mut(key) {
        Some(slot) => *slot = value,
        None => {
            map.insert(key.to_owned(), value);
        }
    }
}

impl SceneDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            camera: None,
            objects: LinkedHashMap::new(),
            lights: LinkedHashMap::new(),
        }
    }

    /// Objects are keyed by name: a second object with the same name overwrites the
    /// first one but keeps its place.
    pub fn insert_object(&mut self, node: ShapeNode) {
        let key = node.name.clone();
        upsert(&mut self.objects, &key, node);
    }

    pub fn insert_light(&mut self, node: LightNode) {
        let key = node.name.clone();
        upsert(&mut self.lights, &key, node);
    }
}

impl ExportDocument {
    pub fn to_writer<W: Write>(&self, writer: W, format: DocumentFormat) -> Result<(), ExportError> {
        match format {
            DocumentFormat::Yaml => serde_yaml::to_writer(writer, self)?,
            DocumentFormat::Json => serde_json::to_writer_pretty(writer, self)?,
        }
        Ok(())
    }

    pub fn to_string(&self, format: DocumentFormat) -> Result<String, ExportError> {
        Ok(match format {
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        material::MaterialNode,
        math::{euler::Euler, remap::RotationConvention},
        scene::Annotations,
        shape::{ShapeDescriptor, ShapeNode, ShapeType},
    };

    use super::*;

    fn node(name: &str, shape_type: ShapeType) -> ShapeNode {
        let annotations = Annotations::new();
        let shape = ShapeDescriptor {
            name,
            position: Vec3::ZERO,
            rotation: Euler::ZERO,
            scale: Vec3::ONE,
            material: None,
            annotations: &annotations,
        };
        ShapeNode::new(shape_type, &shape, RotationConvention::Canonical)
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let mut doc = SceneDocument::new("Scene");
        doc.insert_object(node("SpherePlane", ShapeType::Sphere));
        doc.insert_object(node("Cube", ShapeType::Cube));
        doc.insert_object(node("SpherePlane", ShapeType::Plane));

        let keys: Vec<_> = doc.objects.keys().map(String::as_str).collect();
        assert_eq!(keys, ["SpherePlane", "Cube"]);
        assert_eq!(doc.objects["SpherePlane"].shape_type, ShapeType::Plane);
    }

    #[test]
    fn missing_camera_is_an_empty_mapping() {
        let doc = ExportDocument {
            scene: SceneDocument::new("Empty"),
        };
        let value: serde_json::Value =
            serde_json::from_str(&doc.to_string(DocumentFormat::Json).unwrap()).unwrap();
        assert_eq!(value["scene"]["camera"], serde_json::json!({}));
        assert_eq!(value["scene"]["objects"], serde_json::json!({}));
        assert_eq!(value["scene"]["lights"], serde_json::json!({}));
    }

    #[test]
    fn yaml_layout() {
        let mut scene = SceneDocument::new("Scene");
        scene.insert_object(node("Sphere", ShapeType::Sphere));
        let yaml = ExportDocument { scene }
            .to_string(DocumentFormat::Yaml)
            .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let sphere = &value["scene"]["objects"]["Sphere"];
        assert_eq!(sphere["type"].as_u64(), Some(0));
        assert_eq!(sphere["radius"].as_f64(), Some(1.0));
        assert!(sphere.get("extent").is_none());
        assert_eq!(sphere["material"]["castShadow"].as_bool(), Some(true));
        assert_eq!(sphere["material"]["refractiveIndex"].as_f64(), Some(1.0));
        assert!(sphere["material"].get("pattern").is_none());

        let translation: Vec<f64> = sphere["transform"]["translation"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(serde_yaml::Value::as_f64)
            .collect();
        assert_eq!(translation, [0.0, 0.0, 0.0, 1.0]);

        assert_eq!(
            value["scene"]["camera"].as_mapping().map(|m| m.len()),
            Some(0)
        );
        // Field order follows the document layout
        let name_at = yaml.find("name: Scene").unwrap();
        assert!(name_at < yaml.find("camera:").unwrap());
        assert!(yaml.find("camera:").unwrap() < yaml.find("objects:").unwrap());
        assert!(yaml.find("objects:").unwrap() < yaml.find("lights:").unwrap());
    }

    #[test]
    fn non_finite_values() {
        let annotations = Annotations::new();
        let shape = ShapeDescriptor {
            name: "Sphere",
            position: Vec3::new(f32::NAN, 0.0, f32::INFINITY),
            rotation: Euler::ZERO,
            scale: Vec3::ONE,
            material: None,
            annotations: &annotations,
        };
        let mut scene = SceneDocument::new("Broken");
        scene.insert_object(ShapeNode::sphere(&shape, RotationConvention::Canonical));
        let doc = ExportDocument { scene };

        let yaml = doc.to_string(DocumentFormat::Yaml).unwrap();
        assert!(yaml.contains(".nan"));
        assert!(yaml.contains(".inf"));

        let json: serde_json::Value =
            serde_json::from_str(&doc.to_string(DocumentFormat::Json).unwrap()).unwrap();
        let translation = &json["scene"]["objects"]["Sphere"]["transform"]["translation"];
        assert!(translation[0].is_null());
        assert!(translation[1].is_null());
        assert_eq!(translation[2], 0.0);
    }

    #[test]
    fn default_material_yaml() {
        let yaml = serde_yaml::to_string(&MaterialNode::default()).unwrap();
        assert!(yaml.contains("ambient: 0.1"));
        assert!(yaml.contains("diffuse: 0.9"));
        assert!(yaml.contains("shininess: 200.0"));
    }
}
