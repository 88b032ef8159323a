//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use terrain_noise::{DepthSampling, GeneratorConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noisemap")]
#[command(about = "Seeded gradient-noise heightmaps and density fields", long_about = None)]
pub struct Args {
    /// JSON generator config; flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// World seed
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Distance between grid samples in noise space
    #[arg(long)]
    pub scale: Option<f64>,

    /// Sample-space height where altitude attenuation begins
    #[arg(long, value_name = "Y", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Apply the scale to the third axis of density fields too
    #[arg(long)]
    pub scaled_depth: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a 2D heightmap and save a colored preview
    Heightmap(HeightmapArgs),
    /// Generate a 3D density field and save a vertical cross-section
    Density(DensityArgs),
}

#[derive(ClapArgs, Debug)]
pub struct HeightmapArgs {
    /// Columns
    #[arg(long, default_value = "256")]
    pub width: usize,

    /// Rows
    #[arg(long, default_value = "256")]
    pub depth: usize,

    /// Heights are scaled into [0, height]
    #[arg(long, default_value = "64")]
    pub height: usize,

    /// Darken slopes facing away from the light
    #[arg(long)]
    pub shade: bool,

    /// Output PNG (defaults to heightmap_<seed>.png)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct DensityArgs {
    #[arg(long, default_value = "64")]
    pub width: usize,

    /// Vertical extent, also the attenuation height
    #[arg(long, default_value = "64")]
    pub height: usize,

    #[arg(long, default_value = "16")]
    pub depth: usize,

    /// Depth index of the cross-section to render
    #[arg(long, default_value = "0")]
    pub slice: usize,

    /// Density above which a voxel is drawn as solid
    #[arg(long, default_value = "0.5")]
    pub solid: f32,

    /// Output PNG (defaults to density_<seed>.png)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl Args {
    /// Fold command-line overrides into a config loaded from file (or the defaults)
    pub fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(threshold) = self.threshold {
            config.attenuation_threshold = threshold;
        }
        if self.scaled_depth {
            config.depth_sampling = DepthSampling::Scaled;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use terrain_noise::{DepthSampling, GeneratorConfig};

    use super::{Args, Command};

    #[test]
    fn overrides_win_over_config() {
        let args = Args::try_parse_from([
            "noisemap",
            "--seed",
            "-12",
            "--scaled-depth",
            "heightmap",
            "--width",
            "8",
        ])
        .unwrap();
        let config = args.apply_overrides(GeneratorConfig {
            seed: 3,
            scale: 0.25,
            ..Default::default()
        });
        assert_eq!(config.seed, -12);
        assert_eq!(config.scale, 0.25);
        assert_eq!(config.depth_sampling, DepthSampling::Scaled);
        assert!(matches!(args.command, Command::Heightmap(ref h) if h.width == 8 && h.depth == 256));
    }

    #[test]
    fn negative_extent_rejected() {
        let parsed = Args::try_parse_from(["noisemap", "density", "--width", "-4"]);
        assert!(parsed.is_err());
    }
}
