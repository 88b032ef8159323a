// 2D height map: row‐major Vec<Vec<f32>> of size depth×width
// access as `map[row][col]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// 3D density field indexed as `field[x][y][z]` (width × height × depth)
// Every value is in [0.0, 1.0].
pub type DensityField3D = Vec<Vec<Vec<f32>>>;

// Quintic smoothstep 6t^5 − 15t^4 + 10t^3 on [0, 1].
// Slope and curvature vanish at both ends, so cell seams stay invisible.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Linear interpolation from a (t = 0) to b (t = 1)
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

// Gradient for 2D: the low 2 bits of the hash pick one of (±1, ±1).
// A component is negated when its selector bit is clear.
#[inline]
pub fn grad2(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let u = if h & 1 == 0 { -x } else { x };
    let v = if h & 2 == 0 { -y } else { y };
    u + v
}

// Gradient for 3D, in the classic selector layout.
// Only the low 2 bits survive the mask, so 12/13 never match and every
// gradient stays in the xy-plane. Existing worlds depend on this.
#[inline]
pub fn grad3(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 3;
    let u = if h < 8 || h == 12 || h == 13 { x } else { y };
    let v = if h < 4 || h == 12 || h == 13 { y } else { z };
    let u = if h & 1 == 0 { -u } else { u };
    let v = if h & 2 == 0 { -v } else { v };
    u + v
}

// Map a raw sample in [-1, 1] to [0, 1]
#[inline]
pub fn normalize(n: f64) -> f64 {
    (n + 1.0) / 2.0
}

// flatten a 2D height map (row‐major) into a single Vec<f32>
// For converting to an image buffer or handing to a mesh builder
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// flatten a 3D density field in [x][y][z] order
pub fn flatten3(field: &DensityField3D) -> Vec<f32> {
    field
        .iter()
        .flat_map(|plane| plane.iter().flat_map(|column| column.iter().cloned()))
        .collect()
}

// (min, max, mean) over a flat buffer, None when empty
pub fn stats(flat: &[f32]) -> Option<(f32, f32, f32)> {
    if flat.is_empty() {
        return None;
    }
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;
    for &v in flat {
        min = min.min(v);
        max = max.max(v);
        sum += v as f64;
    }
    Some((min, max, (sum / flat.len() as f64) as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
        // flat at both ends
        assert!(fade(1e-4) < 1e-10);
        assert!(1.0 - fade(1.0 - 1e-4) < 1e-10);
    }

    #[test]
    fn lerp_blends() {
        assert_eq!(lerp(0.0, 2.0, 6.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 6.0), 6.0);
        assert_eq!(lerp(0.25, 2.0, 6.0), 3.0);
    }

    #[test]
    fn grad2_sign_selection() {
        assert_eq!(grad2(0, 0.25, 0.5), -0.75);
        assert_eq!(grad2(1, 0.25, 0.5), -0.25);
        assert_eq!(grad2(2, 0.25, 0.5), 0.25);
        assert_eq!(grad2(3, 0.25, 0.5), 0.75);
        // only the low two bits count
        assert_eq!(grad2(0b1111_1101, 0.25, 0.5), grad2(1, 0.25, 0.5));
    }

    #[test]
    fn grad3_ignores_z() {
        for hash in 0..=255u8 {
            assert_eq!(grad3(hash, 0.3, -0.6, 0.9), grad3(hash, 0.3, -0.6, -0.1));
            assert_eq!(grad3(hash, 0.3, -0.6, 0.0), grad2(hash, 0.3, -0.6));
        }
    }

    #[test]
    fn flatten_orders() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);

        let field = vec![vec![vec![1.0, 2.0]], vec![vec![3.0, 4.0]]];
        assert_eq!(flatten3(&field), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn stats_of_empty_is_none() {
        assert!(stats(&[]).is_none());
        let (min, max, mean) = stats(&[1.0, 3.0]).unwrap();
        assert_eq!((min, max, mean), (1.0, 3.0, 2.0));
    }
}
