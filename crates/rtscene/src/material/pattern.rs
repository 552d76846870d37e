//! Procedural pattern read from the free-form annotations of a mesh.
//!
//! The pattern transform is authored directly in renderer space: unlike every other
//! vector of the document it is written without the Y/Z swap.

use serde::Serialize;

use crate::{
    color::Rgb,
    math::remap::{Tuple4, POINT_W},
    scene::{AnnotationValue, Annotations},
};

pub const PATTERN_KEY: &str = "Pattern";
pub const PATTERN_TYPE_KEY: &str = "PatternType";
pub const PATTERN_COLOR1_KEY: &str = "PatternColor1";
pub const PATTERN_COLOR2_KEY: &str = "PatternColor2";
pub const PATTERN_SCALE_KEY: &str = "PatternScale";
pub const PATTERN_ROTATION_KEY: &str = "PatternRotation";
pub const PATTERN_TRANSLATION_KEY: &str = "PatternTranslation";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternNode {
    pub name: String,
    /// Handed to the renderer untouched
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<AnnotationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color1: Option<Tuple4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<Tuple4>,
    pub transform: PatternTransform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternTransform {
    pub scale: Tuple4,
    pub rotation: Tuple4,
    pub translation: Tuple4,
}

impl Default for PatternTransform {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0, POINT_W],
            rotation: [0.0, 0.0, 0.0, POINT_W],
            translation: [0.0, 0.0, 0.0, POINT_W],
        }
    }
}

impl PatternNode {
    /// Returns `None` when there is no `Pattern` key at all.
    ///
    /// Every other key is optional; values of the wrong shape are skipped as if absent.
    pub fn from_annotations(annotations: &Annotations) -> Option<Self> {
        let name = match annotations.get(PATTERN_KEY)? {
            AnnotationValue::Text(name) => name.clone(),
            other => {
                log::debug!("pattern name {other} is not a string, writing it as text");
                other.to_string()
            }
        };

        let color = |key: &str| {
            let value = annotations.get(key)?;
            let rgb = value.as_floats().and_then(|v| Rgb::from_slice(&v));
            if rgb.is_none() {
                log::debug!("pattern {name:?}: ignoring {key} = {value}");
            }
            rgb.map(Rgb::to_tuple)
        };
        let vector = |key: &str, default: Tuple4| {
            let Some(value) = annotations.get(key) else {
                return default;
            };
            match value.as_vec3() {
                Some([x, y, z]) => [x, y, z, POINT_W],
                None => {
                    log::debug!("pattern {name:?}: ignoring {key} = {value}");
                    default
                }
            }
        };

        let defaults = PatternTransform::default();
        let scale = match annotations.get(PATTERN_SCALE_KEY).and_then(AnnotationValue::as_f32) {
            Some(s) => [s, s, s, POINT_W],
            None => vector(PATTERN_SCALE_KEY, defaults.scale),
        };

        Some(PatternNode {
            pattern_type: annotations.get(PATTERN_TYPE_KEY).cloned(),
            color1: color(PATTERN_COLOR1_KEY),
            color2: color(PATTERN_COLOR2_KEY),
            transform: PatternTransform {
                scale,
                rotation: vector(PATTERN_ROTATION_KEY, defaults.rotation),
                translation: vector(PATTERN_TRANSLATION_KEY, defaults.translation),
            },
            name,
        })
    }
}
