pub mod pattern;

pub use pattern::{PatternNode, PatternTransform};

use serde::{Deserialize, Serialize};

use crate::{
    color::{linear, Rgb},
    math::remap::Tuple4,
};

pub const AMBIENT: f32 = 0.1;
pub const DIFFUSE: f32 = 0.9;
pub const SPECULAR: f32 = 0.3;
pub const SHININESS: f32 = 200.0;

/// A material as the host stores it: a graph of shading nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<ShadingNode>,
}

impl MaterialDescriptor {
    /// The first physically based surface node of the graph, the only one consulted
    pub fn principled(&self) -> Option<&PrincipledInputs> {
        self.nodes.iter().find_map(|node| match node {
            ShadingNode::PrincipledBsdf(inputs) => Some(inputs),
            ShadingNode::Other => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShadingNode {
    #[serde(rename = "BSDF_PRINCIPLED")]
    PrincipledBsdf(PrincipledInputs),
    #[serde(other)]
    Other,
}

/// Inputs of a principled surface node. Missing inputs take the host's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrincipledInputs {
    pub base_color: Rgb,
    pub metallic: f32,
    /// Read for completeness, the renderer has no use for it
    pub roughness: f32,
    pub ior: f32,
    pub specular: f32,
    pub transmission: f32,
}

impl Default for PrincipledInputs {
    fn default() -> Self {
        Self {
            base_color: Rgb::from_array([0.8, 0.8, 0.8]),
            metallic: 0.0,
            roughness: 0.5,
            ior: 1.45,
            specular: 0.5,
            transmission: 0.0,
        }
    }
}

/// Material record of a shape node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialNode {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    pub color: Tuple4,
    pub reflective: f32,
    pub refractive_index: f32,
    pub transparency: f32,
    pub cast_shadow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternNode>,
}

impl Default for MaterialNode {
    /// Used for every shape that has no material
    fn default() -> Self {
        Self {
            ambient: AMBIENT,
            diffuse: DIFFUSE,
            specular: SPECULAR,
            shininess: SHININESS,
            color: linear::WHITE.to_tuple(),
            reflective: 0.0,
            refractive_index: 1.0,
            transparency: 0.0,
            cast_shadow: true,
            pattern: None,
        }
    }
}

impl MaterialNode {
    /// Ambient, diffuse and shininess are never read from the host.
    pub fn from_principled(inputs: &PrincipledInputs) -> Self {
        Self {
            specular: inputs.specular,
            color: inputs.base_color.to_tuple(),
            reflective: inputs.metallic,
            refractive_index: inputs.ior,
            transparency: inputs.transmission,
            cast_shadow: inputs.transmission <= 0.0,
            ..Default::default()
        }
    }

    /// Falls back to the default material when the graph has no principled node.
    pub fn from_descriptor(material: &MaterialDescriptor) -> Self {
        match material.principled() {
            Some(inputs) => Self::from_principled(inputs),
            None => {
                log::debug!(
                    "material {:?} has no principled surface node, using defaults",
                    material.name
                );
                Self::default()
            }
        }
    }

    pub fn with_pattern(self, pattern: Option<PatternNode>) -> Self {
        Self { pattern, ..self }
    }
}
