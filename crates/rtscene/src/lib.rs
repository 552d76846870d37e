//! Turns a snapshot of a modeling tool's scene into the scene document read by the ray tracer.
//!
//! The host side is abstracted by [scene::SceneSource]: an adapter hands over read-only
//! descriptors and [export::Exporter] maps them field by field into an [document::ExportDocument].

pub mod camera;
pub mod color;
pub mod document;
pub mod error;
pub mod export;
pub mod light;
pub mod material;
pub mod math;
pub mod scene;
pub mod shape;
pub mod utils;

pub use document::{DocumentFormat, ExportDocument, SceneDocument};
pub use error::ExportError;
pub use export::{ExportOptions, Exporter};
pub use scene::{SceneSnapshot, SceneSource};
