use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{instrument, trace};

// Lattice coordinates are wrapped into [0, 255] with this mask
pub const LATTICE_MASK: i64 = 255;

// Seeded lookup table hashing lattice coordinates into gradient selectors.
// Immutable once built; share it by reference (or behind an Arc) across readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    seed: i64,       // Seed the table was built from
    perm: [u8; 512], // permutation table (256 duplicated)
}

impl PermutationTable {
    #[instrument(level = "debug")]
    pub fn new(seed: i64) -> Self {
        // Identity sequence 0..=255, shuffled below
        let mut p: Vec<u8> = (0..=255).collect();
        // ChaCha8 keeps the stream identical on every platform
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            // mod (i + 1) to constrain it to [0..i]
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }
        // Duplicate into an array of length 512
        // so perm[perm[x] + y] never needs a modulo
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&p);
        perm[256..].copy_from_slice(&p);
        trace!(head = ?&perm[..8], "permutation table built");

        Self { seed, perm }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn as_slice(&self) -> &[u8; 512] {
        &self.perm
    }

    // Wrap a floored lattice coordinate into table domain.
    // Masking (not %) keeps negative cells in [0, 255].
    #[inline]
    pub fn wrap(cell: i64) -> usize {
        (cell & LATTICE_MASK) as usize
    }

    // Next lattice corner, stepped inside table domain so huge cells can't overflow
    #[inline]
    pub fn next(wrapped: usize) -> usize {
        (wrapped + 1) & LATTICE_MASK as usize
    }

    // Double indirection for a 2D corner: perm[perm[x] + y]
    #[inline]
    pub fn hash2(&self, xi: usize, yi: usize) -> u8 {
        self.perm[self.perm[xi] as usize + yi]
    }

    // Triple indirection for a 3D corner: perm[perm[perm[x] + y] + z]
    #[inline]
    pub fn hash3(&self, xi: usize, yi: usize, zi: usize) -> u8 {
        self.perm[self.hash2(xi, yi) as usize + zi]
    }
}
