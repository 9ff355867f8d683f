use std::fs;
use std::path::Path;

use log::info;

use fractal_viewer::{EngineConfig, PpmFilePresenter, SnapshotController, ViewerPreset, ViewerState};

const OUTPUT_DIR: &str = "output";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    fs::create_dir_all(OUTPUT_DIR)?;

    let config = EngineConfig::default();
    info!("rendering with {} workers", config.worker_count);

    let mut controller = SnapshotController::new(PpmFilePresenter::new(), config)?;

    for preset in ViewerPreset::ALL {
        let mut viewer = ViewerState::new(preset)?;
        controller.render(&mut viewer)?;

        let filepath = Path::new(OUTPUT_DIR).join(format!("{}.ppm", preset.slug()));
        controller.write(&filepath)?;
        info!("saved {} to {}", preset, filepath.display());
    }

    Ok(())
}
