//! Plume - demo exporter for the piano visualizer smoke effects
//!
//! Simulates and renders the dust and smoke effects over a built-in
//! demo score, one video frame per iteration, writing each composited
//! frame as a binary PPM. Cache files live under the output directory
//! and are removed when the export finishes; within the loop, each
//! effect's simulate call runs strictly before its render call on the
//! same path, the serialization the kernel requires of its caller.

mod config;
mod score;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plume_frame::FrameBuffer;
use plume_kernel::{dust, smoke, DustConfig, SimParams, SmokeConfig, VelocityBounds, Xorshift64};

use config::Config;

/// Pixels-per-second emission bounds for the smoke effect
const SMOKE_VELOCITY: VelocityBounds = VelocityBounds {
    vx_min: -15.0,
    vx_max: 15.0,
    vy_min: -150.0,
    vy_max: -80.0,
};

/// Particles emitted per sounding note per frame
const DUST_PER_NOTE: u32 = 2;
const SMOKE_PER_NOTE: u32 = 40;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let frames: u32 = match args.next() {
        Some(s) => s.parse().context("frame count must be a number")?,
        None => 300,
    };
    let outdir = PathBuf::from(args.next().unwrap_or_else(|| "plume-out".into()));

    let config = Config::load();
    // First run leaves the defaults on disk for editing.
    if let Err(e) = config.save() {
        warn!("cannot write config {}: {}", Config::config_path().display(), e);
    }

    run_export(&config, frames, &outdir)
}

fn run_export(config: &Config, frames: u32, outdir: &Path) -> Result<()> {
    let cache_dir = outdir.join("cache");
    fs::create_dir_all(&cache_dir)
        .with_context(|| format!("cannot create {}", cache_dir.display()))?;

    let dust_cache = cache_dir.join("dust.bin");
    let smoke_cache = cache_dir.join("smoke.bin");

    let dust_cfg = DustConfig::default();
    let smoke_cfg = SmokeConfig::default();
    let mut rng = Xorshift64::default();

    // Notes emit from the top of the keyboard, three quarters down the frame.
    let y_start = config.height as f64 * 0.75;

    info!(
        "exporting {} frames at {}x{} to {}",
        frames,
        config.width,
        config.height,
        outdir.display()
    );

    for frame in 0..frames {
        let time = frame as f64 / config.fps;
        let notes = score::sounding(time, config.width);

        let dust_sim = SimParams {
            fps: config.fps,
            frame,
            width: config.width,
            height: config.height,
            notes: &notes,
            y_start,
            particles_per_note: DUST_PER_NOTE,
            input: (frame > 0).then_some(dust_cache.as_path()),
            output: &dust_cache,
        };
        dust::simulate(&dust_cfg, &dust_sim, &mut rng);

        let smoke_sim = SimParams {
            particles_per_note: SMOKE_PER_NOTE,
            input: (frame > 0).then_some(smoke_cache.as_path()),
            output: &smoke_cache,
            ..dust_sim
        };
        smoke::simulate(&smoke_cfg, &smoke_sim, &SMOKE_VELOCITY, true, &mut rng);

        let mut buffer = FrameBuffer::new(config.width, config.height);
        let mut target = buffer.as_frame();
        smoke::render(&smoke_cfg, &mut target, &smoke_cache, config.intensity);
        dust::render(&dust_cfg, &mut target, &dust_cache, config.intensity);
        drop(target);

        write_ppm(&outdir.join(format!("frame_{frame:04}.ppm")), &buffer)?;

        if frame % 30 == 0 {
            info!("frame {}/{}, {} sounding notes", frame, frames, notes.len());
        }
    }

    // The exporter owns these caches; remove them with the run.
    fs::remove_file(&dust_cache).ok();
    fs::remove_file(&smoke_cache).ok();

    info!("done");
    Ok(())
}

/// Write a binary PPM (P6) image
fn write_ppm(path: &Path, buffer: &FrameBuffer) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    writer.write_all(buffer.as_bytes())?;
    writer.flush()?;
    Ok(())
}
