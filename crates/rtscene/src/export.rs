//! Entry point of an export: rebuild the document from the host state and write it.
//!
//! Nothing is cached between two exports, every call walks the scene again.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    camera::{CameraDescriptor, CameraNode},
    document::{DocumentFormat, ExportDocument, SceneDocument},
    error::ExportError,
    light::{LightNode, PointLightDescriptor},
    math::remap::RotationConvention,
    scene::SceneSource,
    shape::{ShapeDescriptor, ShapeNode, ShapeType},
    utils::timer::{format_elapsed, timed_scope},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub rotation_convention: RotationConvention,
    pub format: DocumentFormat,
}

#[derive(Debug, Clone, Default)]
pub struct Exporter {
    pub options: ExportOptions,
}

/// `<dir>/<scene name>.<ext>`, the file a scene is exported to when no path is given
pub fn default_output_path(dir: &Path, scene_name: &str, format: DocumentFormat) -> PathBuf {
    dir.join(format!("{scene_name}.{}", format.extension()))
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Map the current state of `source` to a document.
    ///
    /// Shapes are discovered spheres first, then planes, then cubes. A missing camera
    /// or material is reported and worked around, never an error.
    pub fn build<S: SceneSource + ?Sized>(&self, source: &S) -> ExportDocument {
        let mut scene = SceneDocument::new(source.scene_name());

        scene.camera = source
            .active_camera()
            .and_then(CameraDescriptor::from_object)
            .map(|camera| CameraNode::from(&camera));
        if scene.camera.is_none() {
            log::warn!("No active camera found or the active object is not a camera.");
        }

        for shape_type in ShapeType::ALL {
            for object in source.shapes(shape_type) {
                let Some(shape) = ShapeDescriptor::from_object(object) else {
                    continue;
                };
                scene.insert_object(ShapeNode::new(
                    shape_type,
                    &shape,
                    self.options.rotation_convention,
                ));
            }
        }

        for object in source.point_lights() {
            if let Some(light) = PointLightDescriptor::from_object(object) {
                scene.insert_light(LightNode::new(&object.name, &light));
            }
        }

        log::info!(
            "scene {:?}: {} objects, {} lights",
            scene.name,
            scene.objects.len(),
            scene.lights.len()
        );

        ExportDocument { scene }
    }

    /// Build a fresh document and overwrite `path` with it.
    ///
    /// The parent directory must exist. Any write failure aborts the export.
    pub fn rebuild_and_write<S: SceneSource + ?Sized>(
        &self,
        source: &S,
        path: &Path,
    ) -> Result<ExportDocument, ExportError> {
        let timed = timed_scope(|| -> Result<ExportDocument, ExportError> {
            let document = self.build(source);

            let io_err = |source| ExportError::Io {
                path: path.to_owned(),
                source,
            };
            let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
            document.to_writer(&mut writer, self.options.format)?;
            writer.flush().map_err(io_err)?;
            Ok(document)
        });

        let document = timed.res?;
        log::info!(
            "scene {:?} written to {} in {}",
            document.scene.name,
            path.display(),
            format_elapsed(timed.elapsed)
        );
        Ok(document)
    }
}
