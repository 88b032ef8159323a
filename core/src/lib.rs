// terrain_noise holds the seeded gradient-noise kernel and the field generators built on it
pub mod altitude;
pub mod config;
pub mod error;
pub mod field;
pub mod perlin2;
pub mod perlin3;
pub mod permutation;
pub mod utils;

pub use altitude::AltitudeAttenuation;
pub use config::{DepthSampling, GeneratorConfig};
pub use error::FieldError;
pub use field::FieldGenerator;
pub use perlin2::Perlin2D;
pub use perlin3::Perlin3D;
pub use permutation::PermutationTable;
pub use utils::{DensityField3D, HeightMap2D, flatten2, flatten3};

// Samplers over a seeded lattice.
// Raw samples are roughly in [-1.0, +1.0].
pub trait NoiseGenerator2D {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;
}

pub trait NoiseGenerator3D {
    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}
