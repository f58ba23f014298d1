use fractal_drift::{
    DEFAULT_JULIA_CONSTANT, ExplorationConfig, ExploreCliController, FractalFamily,
    PbmFilePresenter, Resolution,
};
use std::path::Path;

const DEFAULT_FRAMES: u32 = 20;

fn run(
    family: FractalFamily,
    frames: u32,
    directory: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = Resolution::new(640, 384)?;
    let presenter = PbmFilePresenter::new(directory.as_ref(), family.display_name().to_lowercase() + "_");
    let mut controller =
        ExploreCliController::new(presenter, ExplorationConfig::for_family(family), resolution)?;

    controller.run(frames)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let family = match args.next().as_deref() {
        None | Some("mandelbrot") => FractalFamily::Mandelbrot,
        Some("julia") => FractalFamily::Julia(DEFAULT_JULIA_CONSTANT),
        Some(other) => return Err(format!("unknown fractal family: {}", other).into()),
    };
    let frames = match args.next() {
        Some(count) => count.parse()?,
        None => DEFAULT_FRAMES,
    };

    run(family, frames, "output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_ok() {
        let dir = std::env::temp_dir().join(format!("fractal_drift_main_{}", std::process::id()));

        let result = run(FractalFamily::Mandelbrot, 2, &dir);

        assert!(result.is_ok());
        assert!(dir.join("mandelbrot_00001.pbm").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
