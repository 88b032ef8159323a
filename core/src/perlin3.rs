use crate::{
    NoiseGenerator3D,
    permutation::PermutationTable,
    utils::{fade, grad3, lerp},
};

// This is similar to Perlin2D but extended to 3D
#[derive(Clone, Copy, Debug)]
pub struct Perlin3D<'a> {
    perm: &'a PermutationTable,
}

impl<'a> Perlin3D<'a> {
    pub fn new(perm: &'a PermutationTable) -> Self {
        Self { perm }
    }

    // Raw single‐octave noise at (x, y, z).
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        // Find unit cube that contains point
        let x0 = x.floor();
        let y0 = y.floor();
        let z0 = z.floor();
        // Relative coordinates within cube
        let rel_x = x - x0;
        let rel_y = y - y0;
        let rel_z = z - z0;

        let xi = PermutationTable::wrap(x0 as i64);
        let yi = PermutationTable::wrap(y0 as i64);
        let zi = PermutationTable::wrap(z0 as i64);
        let xj = PermutationTable::next(xi);
        let yj = PermutationTable::next(yi);
        let zj = PermutationTable::next(zi);

        // Hash corners of the cube
        let h000 = self.perm.hash3(xi, yi, zi);
        let h001 = self.perm.hash3(xi, yi, zj);
        let h010 = self.perm.hash3(xi, yj, zi);
        let h011 = self.perm.hash3(xi, yj, zj);
        let h100 = self.perm.hash3(xj, yi, zi);
        let h101 = self.perm.hash3(xj, yi, zj);
        let h110 = self.perm.hash3(xj, yj, zi);
        let h111 = self.perm.hash3(xj, yj, zj);

        // Compute gradient contributions
        let g000 = grad3(h000, rel_x, rel_y, rel_z);
        let g001 = grad3(h001, rel_x, rel_y, rel_z - 1.0);
        let g010 = grad3(h010, rel_x, rel_y - 1.0, rel_z);
        let g011 = grad3(h011, rel_x, rel_y - 1.0, rel_z - 1.0);
        let g100 = grad3(h100, rel_x - 1.0, rel_y, rel_z);
        let g101 = grad3(h101, rel_x - 1.0, rel_y, rel_z - 1.0);
        let g110 = grad3(h110, rel_x - 1.0, rel_y - 1.0, rel_z);
        let g111 = grad3(h111, rel_x - 1.0, rel_y - 1.0, rel_z - 1.0);

        // Fade curves for each
        let u = fade(rel_x);
        let v = fade(rel_y);
        let w = fade(rel_z);

        // x along the four edges
        let lx00 = lerp(u, g000, g100);
        let lx01 = lerp(u, g001, g101);
        let lx10 = lerp(u, g010, g110);
        let lx11 = lerp(u, g011, g111);

        // y to the two faces
        let ly0 = lerp(v, lx00, lx10);
        let ly1 = lerp(v, lx01, lx11);

        // Final interpolation along z:
        lerp(w, ly0, ly1)
    }
}

impl NoiseGenerator3D for Perlin3D<'_> {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise(x, y, z)
    }
}
