use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use dda_core::{default_thread_count, init_thread_pool};
use dda_describe::{BriefConfig, NccConfig};
use dda_tracker::{
    fast_brief, fast_ncc, AdapterError, DescribeRegionPoint, DescriberConfig, DetectDescribeAdapter,
    DetectDescribePoint, FeatureError, GeneralFeatureDetector, Image, PipelineConfig, Point2D,
};
use image::{ImageReader, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;
use log::{error, info, warn};
use thiserror::Error;

/// Detect and describe point features in a sequence of images.
#[derive(Parser, Debug)]
#[command(name = "dda", version, about)]
struct CliArgs {
    /// Input images, processed in order with a single adapter
    #[arg(required = true, value_name = "IMAGE")]
    inputs: Vec<PathBuf>,
    /// Pipeline configuration (.toml or .json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Override the describer kind
    #[arg(long, value_enum)]
    describer: Option<DescriberKind>,
    /// Override the feature scale
    #[arg(long)]
    scale: Option<f64>,
    /// Override the FAST threshold
    #[arg(long)]
    threshold: Option<u8>,
    /// Suppress detections near the previous frame's features
    #[arg(long)]
    exclude_previous: bool,
    /// Directory for annotated copies of the inputs
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Worker threads for detection
    #[arg(long)]
    threads: Option<usize>,
    /// Log filter, e.g. "info" or "dda_tracker=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum DescriberKind {
    Brief,
    Ncc,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] AdapterError),
    #[error("{}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Features {
        path: PathBuf,
        #[source]
        source: FeatureError,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logger(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_filters(level);
    if let Err(err) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", err);
    }
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let threads = args.threads.unwrap_or_else(default_thread_count);
    if let Err(err) = init_thread_pool(threads) {
        warn!("Thread pool already initialized: {}", err);
    }

    let config = resolve_config(args)?;
    info!("{}", config.summary());

    match config.describer.clone() {
        DescriberConfig::Brief(brief) => {
            let mut adapter = fast_brief(config.fast, brief, config.adapter)?;
            process_sequence(&mut adapter, args)
        }
        DescriberConfig::Ncc(ncc) => {
            let mut adapter = fast_ncc(config.fast, ncc, config.adapter)?;
            process_sequence(&mut adapter, args)
        }
    }
}

/// File config first, then command-line overrides
fn resolve_config(args: &CliArgs) -> Result<PipelineConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    match (args.describer, &config.describer) {
        (Some(DescriberKind::Brief), DescriberConfig::Ncc(_)) => {
            config.describer = DescriberConfig::Brief(BriefConfig::default());
        }
        (Some(DescriberKind::Ncc), DescriberConfig::Brief(_)) => {
            config.describer = DescriberConfig::Ncc(NccConfig::default());
        }
        _ => {}
    }
    if let Some(scale) = args.scale {
        config.adapter.scale = scale;
    }
    if let Some(threshold) = args.threshold {
        config.fast.threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

fn process_sequence<D, R>(adapter: &mut DetectDescribeAdapter<D, R>, args: &CliArgs) -> Result<(), CliError>
where
    D: GeneralFeatureDetector<Image = Image>,
    R: DescribeRegionPoint<Image = D::Image>,
{
    let mut previous: Vec<Point2D> = Vec::new();
    let mut total = 0usize;

    for path in &args.inputs {
        let img = load_gray(path)?;
        let (w, h) = img.dimensions();

        let t0 = Instant::now();
        let result = if args.exclude_previous && !previous.is_empty() {
            adapter.detect_features_excluding(&img, &previous)
        } else {
            adapter.detect_features(&img)
        };
        let count = result
            .map_err(|source| CliError::Features {
                path: path.clone(),
                source,
            })?
            .0
            .len();
        let elapsed = t0.elapsed();

        info!(
            "{}: {}x{}, {} features ({} x {}) in {:.2?}",
            path.display(),
            w,
            h,
            count,
            adapter.description_length(),
            adapter.description_type(),
            elapsed
        );
        total += count;

        if let Some(dir) = &args.output {
            save_annotated(img, adapter.locations(), dir, path)?;
        }

        previous.clear();
        previous.extend_from_slice(adapter.locations());
    }

    info!("{} images, {} features", args.inputs.len(), total);
    Ok(())
}

fn load_gray(path: &Path) -> Result<Image, CliError> {
    let reader = ImageReader::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|source| CliError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_luma8())
}

/// Draw red circles at each feature and save next to `dir/<stem>_features.png`
fn save_annotated(img: Image, locations: &[Point2D], dir: &Path, input: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut output: RgbaImage = image::DynamicImage::ImageLuma8(img).into_rgba8();
    for p in locations {
        draw_hollow_circle_mut(&mut output, (p.x as i32, p.y as i32), 3, Rgba([255, 0, 0, 255]));
    }

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let out_path = dir.join(format!("{}_features.png", stem));
    output.save(&out_path).map_err(|source| CliError::Image {
        path: out_path.clone(),
        source,
    })?;
    info!("Saved {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["dda"];
        argv.extend_from_slice(extra);
        argv.push("frame.png");
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = resolve_config(&args(&[])).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = resolve_config(&args(&["--describer", "ncc", "--scale", "1.5", "--threshold", "33"])).unwrap();
        assert_eq!(config.describer, DescriberConfig::Ncc(NccConfig::default()));
        assert_eq!(config.adapter.scale, 1.5);
        assert_eq!(config.fast.threshold, 33);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = resolve_config(&args(&["--scale=-1"]));
        assert!(matches!(result, Err(CliError::Config(AdapterError::InvalidScale(_)))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = resolve_config(&args(&["--config", "/nonexistent/dda.toml"]));
        assert!(matches!(result, Err(CliError::Config(AdapterError::Io(_)))));
    }
}
