use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use terrain_noise::{FieldGenerator, GeneratorConfig, flatten2, flatten3, utils::stats};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

use cli::{Args, Command, DensityArgs, HeightmapArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GeneratorConfig::from_json_str(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    let config = args.apply_overrides(base);
    let generator = FieldGenerator::from_config(config)?;
    info!(seed = generator.seed(), config = ?generator.config(), "generator ready");

    match &args.command {
        Command::Heightmap(hm) => heightmap(&generator, hm),
        Command::Density(dn) => density(&generator, dn),
    }
}

fn heightmap(generator: &FieldGenerator, args: &HeightmapArgs) -> Result<()> {
    let scale = generator.config().scale;
    let start = Instant::now();
    let map = generator.generate2d(args.width, args.depth, args.height, scale)?;
    let elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;

    if let Some((min, max, mean)) = stats(&flatten2(&map)) {
        info!(elapsed_ms, min, max, mean, "heightmap {}x{}", args.width, args.depth);
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("heightmap_{}.png", generator.seed())));
    render::heightmap_image(&map, args.height, args.shade)
        .save(&out)
        .with_context(|| format!("saving {}", out.display()))?;
    info!("saved {}", out.display());
    Ok(())
}

fn density(generator: &FieldGenerator, args: &DensityArgs) -> Result<()> {
    let scale = generator.config().scale;
    let start = Instant::now();
    let field = generator.generate3d(args.width, args.height, args.depth, scale)?;
    let elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;

    if let Some((min, max, mean)) = stats(&flatten3(&field)) {
        let solid = render::solid_fraction(&field, args.solid);
        info!(
            elapsed_ms,
            min,
            max,
            mean,
            solid,
            "density field {}x{}x{}",
            args.width,
            args.height,
            args.depth
        );
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("density_{}.png", generator.seed())));
    render::density_slice_image(&field, args.slice, args.solid)?
        .save(&out)
        .with_context(|| format!("saving {}", out.display()))?;
    info!("saved {}", out.display());
    Ok(())
}
