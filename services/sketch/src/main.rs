//! Contour sketch renderer.
//!
//! Renders band boundaries of an animated noise field to PNG, either as a
//! single still or as a numbered frame sequence.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tiny_skia::Pixmap;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sketch::config::SketchConfig;
use sketch::field::NoiseField;
use sketch::pipeline::{point_count, FramePipeline, Layer};
use sketch::render::{encode_png, render_layers, StrokeStyle};

#[derive(Parser, Debug)]
#[command(name = "sketch")]
#[command(about = "Render contour sketches of animated noise fields")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame to PNG
    Render {
        /// Sketch configuration file (YAML or JSON)
        #[arg(short, long, env = "SKETCH_CONFIG", default_value = "config/sketch.yaml")]
        config: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "sketch.png")]
        out: PathBuf,

        /// Frame index to render
        #[arg(long, default_value = "0")]
        frame: u32,

        /// Also write the clipped polylines as JSON
        #[arg(long)]
        polylines_json: Option<PathBuf>,
    },

    /// Render a numbered PNG sequence
    Frames {
        /// Sketch configuration file (YAML or JSON)
        #[arg(short, long, env = "SKETCH_CONFIG", default_value = "config/sketch.yaml")]
        config: PathBuf,

        /// Output directory
        #[arg(long, default_value = "frames")]
        out_dir: PathBuf,

        /// Override the configured frame count
        #[arg(long)]
        frames: Option<u32>,
    },

    /// Validate a configuration and print its bands
    Check {
        /// Sketch configuration file (YAML or JSON)
        #[arg(short, long, env = "SKETCH_CONFIG", default_value = "config/sketch.yaml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json);

    match args.command {
        Command::Render {
            config,
            out,
            frame,
            polylines_json,
        } => {
            let app = Sketch::load(&config)?;
            let (layers, pixmap) = app.render_frame(frame)?;
            write_png(&pixmap, &out)?;
            if let Some(path) = polylines_json {
                write_layers_json(&layers, &path)?;
            }
            Ok(())
        }
        Command::Frames {
            config,
            out_dir,
            frames,
        } => {
            let app = Sketch::load(&config)?;
            let count = frames.unwrap_or(app.config.frames);
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create output directory {:?}", out_dir))?;

            let started = Instant::now();
            for index in 0..count {
                let (_, pixmap) = app.render_frame(index)?;
                write_png(&pixmap, &out_dir.join(format!("frame_{:04}.png", index)))?;
            }
            info!(
                frames = count,
                elapsed_ms = started.elapsed().as_millis() as u64,
                out_dir = %out_dir.display(),
                "Rendered frame sequence"
            );
            Ok(())
        }
        Command::Check { config } => check(&config),
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = fmt().with_env_filter(filter).with_target(true).with_level(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// A loaded sketch, ready to render frames.
struct Sketch {
    config: SketchConfig,
    field: NoiseField,
    pipeline: FramePipeline,
    style: StrokeStyle,
}

impl Sketch {
    fn load(path: &Path) -> Result<Self> {
        let config = SketchConfig::load(path)
            .with_context(|| format!("Failed to load sketch config {:?}", path))?;

        let field = NoiseField::new(&config.noise, config.grid_size());
        let pipeline = FramePipeline::from_config(&config)?;
        let style = StrokeStyle {
            line_width: config.stroke.line_width,
            palette: config.palette()?,
            background: config.background()?,
        };

        info!(
            grid_width = config.grid.width,
            grid_height = config.grid.height,
            bands = pipeline.bands().len(),
            "Loaded sketch configuration"
        );

        Ok(Self {
            config,
            field,
            pipeline,
            style,
        })
    }

    fn render_frame(&self, index: u32) -> Result<(Vec<Layer>, Pixmap)> {
        let started = Instant::now();
        let time = self.config.frame_time(index);

        let grid = self.field.sample(time)?;
        let layers = self.pipeline.run(&grid)?;
        let pixmap = render_layers(
            &layers,
            self.config.output.width,
            self.config.output.height,
            &self.style,
        )?;

        info!(
            frame = index,
            time,
            polylines = layers.iter().map(|l| l.polylines.len()).sum::<usize>(),
            points = point_count(&layers),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rendered frame"
        );

        Ok((layers, pixmap))
    }
}

fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let png = encode_png(pixmap)?;
    fs::write(path, png).with_context(|| format!("Failed to write {:?}", path))
}

fn write_layers_json(layers: &[Layer], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(layers)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), "Wrote polylines");
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let config = SketchConfig::load(path)
        .with_context(|| format!("Invalid sketch config {:?}", path))?;

    println!(
        "grid {}x{} -> output {}x{}, {} frame(s)",
        config.grid.width,
        config.grid.height,
        config.output.width,
        config.output.height,
        config.frames
    );
    for (i, band) in config.bands()?.iter().enumerate() {
        println!("band {:>2}: [{}, {})", i, band.lower(), band.upper());
    }
    Ok(())
}
