use serde::{Deserialize, Serialize};

use crate::math::remap::{Tuple4, DIRECTION_W};

/// Linear RGB color as handed over by the host. Any alpha channel is dropped on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "[f32; 3]")]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    /// Take the first three channels of `values`, ignoring any alpha
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [r, g, b, ..] => Some(Self([*r, *g, *b])),
            _ => None,
        }
    }

    /// Colors are written as directions: the fourth component is always `0.0`
    pub fn to_tuple(self) -> Tuple4 {
        let [r, g, b] = self.0;
        [r, g, b, DIRECTION_W]
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(val: Rgb) -> Self {
        val.0
    }
}

impl TryFrom<Vec<f32>> for Rgb {
    type Error = String;

    fn try_from(value: Vec<f32>) -> Result<Self, Self::Error> {
        Rgb::from_slice(&value)
            .ok_or_else(|| format!("expected at least 3 color channels, got {}", value.len()))
    }
}

pub mod linear {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
}
