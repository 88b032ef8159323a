use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    altitude::AltitudeAttenuation,
    config::{DepthSampling, GeneratorConfig},
    error::FieldError,
    perlin2::Perlin2D,
    perlin3::Perlin3D,
    permutation::PermutationTable,
    utils::{DensityField3D, HeightMap2D, normalize},
};

// Samples a regular grid of noise into heightmaps and density fields.
// The table sits behind an Arc so callers can hand it to worker threads.
#[derive(Clone, Debug)]
pub struct FieldGenerator {
    table: Arc<PermutationTable>,
    config: GeneratorConfig,
}

impl FieldGenerator {
    pub fn new(seed: i64) -> Self {
        Self {
            table: Arc::new(PermutationTable::new(seed)),
            config: GeneratorConfig {
                seed,
                ..Default::default()
            },
        }
    }

    pub fn from_config(config: GeneratorConfig) -> Result<Self, FieldError> {
        config.validate()?;
        Ok(Self {
            table: Arc::new(PermutationTable::new(config.seed)),
            config,
        })
    }

    pub fn seed(&self) -> i64 {
        self.table.seed()
    }

    pub fn table(&self) -> &Arc<PermutationTable> {
        &self.table
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // Replace the table wholesale. Clones of the old Arc keep the old table.
    #[instrument(skip(self), fields(old_seed = self.table.seed()))]
    pub fn reseed(&mut self, seed: i64) {
        self.table = Arc::new(PermutationTable::new(seed));
        self.config.seed = seed;
        debug!("generator reseeded");
    }

    // Heightmap value at column `col`, row `row`, in [0, output_height]
    pub fn sample_height(&self, col: usize, row: usize, output_height: usize, scale: f64) -> f32 {
        let n = Perlin2D::new(&self.table).noise(col as f64 * scale, row as f64 * scale);
        (normalize(n) * output_height as f64) as f32
    }

    // Density at grid index (i, j, k) for a field `height` cells tall, in [0, 1]
    pub fn sample_density(&self, i: usize, j: usize, k: usize, height: usize, scale: f64) -> f32 {
        let attenuation = self.attenuation(height);
        self.density_at(&Perlin3D::new(&self.table), &attenuation, i, j, k, scale)
    }

    // Row-major heightmap: `depth` rows of `width` columns
    #[instrument(skip(self), fields(seed = self.table.seed()))]
    pub fn generate2d(
        &self,
        width: usize,
        depth: usize,
        output_height: usize,
        scale: f64,
    ) -> Result<HeightMap2D, FieldError> {
        check_scale(scale)?;
        if depth == 0 {
            return Ok(Vec::new());
        }
        let perlin = Perlin2D::new(&self.table);
        let mut map = vec![vec![0.0; width]; depth];
        for (r, row) in map.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let n = perlin.noise(c as f64 * scale, r as f64 * scale);
                *cell = (normalize(n) * output_height as f64) as f32;
            }
        }
        debug!(cells = width * depth, "heightmap generated");
        Ok(map)
    }

    // Altitude-attenuated density field indexed [x][y][z]
    #[instrument(skip(self), fields(seed = self.table.seed(), depth_sampling = ?self.config.depth_sampling))]
    pub fn generate3d(
        &self,
        width: usize,
        height: usize,
        depth: usize,
        scale: f64,
    ) -> Result<DensityField3D, FieldError> {
        check_scale(scale)?;
        if width == 0 {
            return Ok(Vec::new());
        }
        let perlin = Perlin3D::new(&self.table);
        let attenuation = self.attenuation(height);
        let mut field = vec![vec![vec![0.0; depth]; height]; width];
        for (i, plane) in field.iter_mut().enumerate() {
            for (j, column) in plane.iter_mut().enumerate() {
                for (k, cell) in column.iter_mut().enumerate() {
                    *cell = self.density_at(&perlin, &attenuation, i, j, k, scale);
                }
            }
        }
        debug!(cells = width * height * depth, "density field generated");
        Ok(field)
    }

    fn attenuation(&self, height: usize) -> AltitudeAttenuation {
        AltitudeAttenuation::new(self.config.attenuation_threshold, height as f64)
    }

    #[inline]
    fn density_at(
        &self,
        perlin: &Perlin3D<'_>,
        attenuation: &AltitudeAttenuation,
        i: usize,
        j: usize,
        k: usize,
        scale: f64,
    ) -> f32 {
        let x = i as f64 * scale;
        let y = j as f64 * scale;
        let z = match self.config.depth_sampling {
            DepthSampling::Unscaled => k as f64,
            DepthSampling::Scaled => k as f64 * scale,
        };
        normalize(attenuation.sample(perlin, x, y, z)) as f32
    }
}

fn check_scale(scale: f64) -> Result<(), FieldError> {
    if scale.is_finite() {
        Ok(())
    } else {
        Err(FieldError::InvalidScale(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::FieldGenerator;
    use crate::{
        config::{DepthSampling, GeneratorConfig},
        error::FieldError,
    };

    #[test]
    fn zero_extent_is_empty() {
        let g = FieldGenerator::new(1);
        assert!(g.generate2d(0, 0, 10, 0.1).unwrap().is_empty());
        assert!(g.generate3d(0, 5, 5, 0.1).unwrap().is_empty());
        // no inner template is built for an empty outer axis
        assert!(g.generate3d(0, 4000, 4000, 0.1).unwrap().is_empty());
        assert!(g.generate2d(100_000, 0, 10, 0.1).unwrap().is_empty());
        // rows exist but have no columns
        let map = g.generate2d(0, 3, 10, 0.1).unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn shapes_follow_arguments() {
        let g = FieldGenerator::new(8);
        let map = g.generate2d(5, 3, 10, 0.2).unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|row| row.len() == 5));

        let field = g.generate3d(2, 4, 6, 0.2).unwrap();
        assert_eq!(field.len(), 2);
        assert!(field.iter().all(|plane| plane.len() == 4));
        assert!(field.iter().flatten().all(|column| column.len() == 6));
    }

    #[test]
    fn non_finite_scale_fails_fast() {
        let g = FieldGenerator::new(0);
        assert!(matches!(
            g.generate2d(4, 4, 10, f64::INFINITY),
            Err(FieldError::InvalidScale(_))
        ));
        assert!(matches!(
            g.generate3d(4, 4, 4, f64::NAN),
            Err(FieldError::InvalidScale(_))
        ));
    }

    #[test]
    fn single_samples_match_generated_cells() {
        let g = FieldGenerator::new(31);
        let map = g.generate2d(6, 4, 32, 0.37).unwrap();
        assert_eq!(map[3][5], g.sample_height(5, 3, 32, 0.37));

        let field = g.generate3d(3, 30, 3, 0.9).unwrap();
        assert_eq!(field[2][17][1], g.sample_density(2, 17, 1, 30, 0.9));
    }

    #[test]
    fn reseed_replaces_table() {
        let mut g = FieldGenerator::new(1);
        let old = g.table().clone();
        g.reseed(2);
        assert_eq!(g.seed(), 2);
        assert_eq!(g.config().seed, 2);
        assert_eq!(old.seed(), 1);
        assert_ne!(old.as_slice(), g.table().as_slice());
    }

    #[test]
    fn depth_sampling_changes_third_axis() {
        let unscaled = FieldGenerator::new(4);
        let scaled = FieldGenerator::from_config(GeneratorConfig {
            seed: 4,
            depth_sampling: DepthSampling::Scaled,
            ..Default::default()
        })
        .unwrap();
        // k = 0 is identical either way
        assert_eq!(
            unscaled.sample_density(1, 2, 0, 8, 0.3),
            scaled.sample_density(1, 2, 0, 8, 0.3)
        );
        let a = unscaled.generate3d(4, 4, 4, 0.3).unwrap();
        let b = scaled.generate3d(4, 4, 4, 0.3).unwrap();
        assert_ne!(a, b);
    }
}
