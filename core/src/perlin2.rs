use crate::{
    NoiseGenerator2D,
    permutation::PermutationTable,
    utils::{fade, grad2, lerp},
};

// 2D gradient noise evaluator over a borrowed permutation table
#[derive(Clone, Copy, Debug)]
pub struct Perlin2D<'a> {
    perm: &'a PermutationTable,
}

impl<'a> Perlin2D<'a> {
    pub fn new(perm: &'a PermutationTable) -> Self {
        Self { perm }
    }

    // Raw single‐octave noise at (x, y)
    // Returns in range ≈ [−1, 1]
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        // Find unit square that contains point (Which square to sample?)
        // floor, not truncation, so -0.5 lands in cell -1
        let x0 = x.floor();
        let y0 = y.floor();
        // Relative x/y within the square (Where within the square?)
        let rel_x = x - x0;
        let rel_y = y - y0;

        // Wrap the corners into table domain
        let xi = PermutationTable::wrap(x0 as i64);
        let yi = PermutationTable::wrap(y0 as i64);
        let xj = PermutationTable::next(xi);
        let yj = PermutationTable::next(yi);

        // Hash coordinates of the four corners
        let h00 = self.perm.hash2(xi, yi);
        let h10 = self.perm.hash2(xj, yi);
        let h01 = self.perm.hash2(xi, yj);
        let h11 = self.perm.hash2(xj, yj);

        // Gradient contributions, offset taken relative to each corner
        let g00 = grad2(h00, rel_x, rel_y);
        let g10 = grad2(h10, rel_x - 1.0, rel_y);
        let g01 = grad2(h01, rel_x, rel_y - 1.0);
        let g11 = grad2(h11, rel_x - 1.0, rel_y - 1.0);

        // Compute fade curves for x, y to get smooth interpolation
        let u = fade(rel_x);
        let v = fade(rel_y);

        // Along x on both rows, then along y
        let lx0 = lerp(u, g00, g10);
        let lx1 = lerp(u, g01, g11);
        lerp(v, lx0, lx1)
    }
}

impl NoiseGenerator2D for Perlin2D<'_> {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.noise(x, y)
    }
}
