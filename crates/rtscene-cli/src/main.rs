mod snapshot;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rtscene::{export::default_output_path, ExportOptions, Exporter, SceneSource};
use utils::{AvailableConvention, AvailableFormat};

#[derive(Parser, Debug)]
pub struct Args {
    /// Scene snapshot to export, as captured by the host adapter
    snapshot: PathBuf,

    #[arg(short, long)]
    /// Output file. Defaults to `<out-dir>/<scene name>.<format>`, overwritten if it exists
    output: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    /// Directory for the default output file, created if missing
    out_dir: PathBuf,

    #[arg(short, long, value_enum, default_value_t)]
    format: AvailableFormat,

    #[arg(long, value_enum, default_value_t)]
    /// How the Z angle of shape rotations is written
    rotation_convention: AvailableConvention,

    #[arg(long)]
    /// Print the document instead of writing it
    dry_run: bool,
}

impl Args {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            rotation_convention: self.rotation_convention.into(),
            format: self.format.into(),
        }
    }

    fn output_path(&self, scene_name: &str) -> Result<PathBuf> {
        if let Some(ref output) = self.output {
            return Ok(output.clone());
        }
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        Ok(default_output_path(
            &self.out_dir,
            scene_name,
            self.format.into(),
        ))
    }
}

fn run(args: &Args) -> Result<()> {
    let snapshot = snapshot::load(&args.snapshot)?;
    let exporter = Exporter::new(args.options());

    if args.dry_run {
        let document = exporter.build(&snapshot);
        print!("{}", document.to_string(exporter.options.format)?);
        return Ok(());
    }

    let path = args.output_path(snapshot.scene_name())?;
    exporter
        .rebuild_and_write(&snapshot, &path)
        .with_context(|| format!("exporting scene {:?}", snapshot.scene_name()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}
