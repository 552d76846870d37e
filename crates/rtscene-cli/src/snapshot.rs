use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use rtscene::SceneSnapshot;

/// Read a scene snapshot written as JSON by the host adapter
pub fn load(path: &Path) -> Result<SceneSnapshot> {
    log::info!("loading scene snapshot {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let snapshot: SceneSnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    log::debug!(
        "snapshot {:?}: {} objects, active camera {:?}",
        snapshot.name,
        snapshot.objects.len(),
        snapshot.active_camera
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use rtscene::SceneSource;

    use super::load;

    #[test]
    fn loads_sample_scene() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/spheres.json");
        let snapshot = load(Path::new(path)).unwrap();
        assert_eq!(snapshot.scene_name(), "Spheres");
        assert!(snapshot.active_camera().is_some());
    }

    #[test]
    fn malformed_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ \"objects\": [] }}").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
