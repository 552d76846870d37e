use clap::ValueEnum;
use rtscene::{math::remap::RotationConvention, DocumentFormat};

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableFormat {
    #[default]
    Yaml,
    Json,
}

impl From<AvailableFormat> for DocumentFormat {
    fn from(val: AvailableFormat) -> Self {
        match val {
            AvailableFormat::Yaml => DocumentFormat::Yaml,
            AvailableFormat::Json => DocumentFormat::Json,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableConvention {
    #[default]
    Canonical,
    /// Negate the Z angle of shape rotations
    NegatedZ,
}

impl From<AvailableConvention> for RotationConvention {
    fn from(val: AvailableConvention) -> Self {
        match val {
            AvailableConvention::Canonical => RotationConvention::Canonical,
            AvailableConvention::NegatedZ => RotationConvention::NegatedZ,
        }
    }
}
